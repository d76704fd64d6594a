use crate::core::color::{Color, palette};

/// Phong-style surface description shared by every drawable in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub shininess: f32,
    pub opacity: f32,
    pub wireframe: bool,
}

impl Material {
    pub fn phong(hex: u32, emissive_intensity: f32, opacity: f32) -> Self {
        Self {
            color: Color::from_hex(hex),
            emissive: Color::from_hex(hex),
            emissive_intensity,
            shininess: 30.0,
            opacity,
            wireframe: false,
        }
    }

    pub fn with_shininess(self, shininess: f32) -> Self {
        Self { shininess, ..self }
    }

    pub fn node() -> Self {
        Self::phong(palette::BLUE, 0.2, 0.8).with_shininess(100.0)
    }

    /// Grown nodes start fully transparent and fade in.
    pub fn seedling() -> Self {
        Self {
            opacity: 0.0,
            ..Self::node()
        }
    }

    pub fn highlight() -> Self {
        Self::phong(palette::PINK, 0.8, 1.0).with_shininess(100.0)
    }

    pub fn ambient_particle() -> Self {
        Self::phong(palette::VIOLET, 0.5, 0.6)
    }

    pub fn flow_particle() -> Self {
        Self::phong(palette::EMERALD, 1.0, 0.8)
    }

    pub fn spark(hex: u32) -> Self {
        Self::phong(hex, 0.8, 0.8)
    }

    pub fn wireframe(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
            emissive: Color::rgba(0.0, 0.0, 0.0, 1.0),
            emissive_intensity: 0.0,
            shininess: 30.0,
            opacity: 0.1,
            wireframe: true,
        }
    }

    /// Color handed to the renderer: base color with the material opacity.
    pub fn fill(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }

    pub fn glow(&self) -> Color {
        self.emissive.scaled(self.emissive_intensity)
    }
}

/// Edge lines carry only a color and an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMaterial {
    pub color: Color,
    pub opacity: f32,
}

impl LineMaterial {
    pub fn link() -> Self {
        Self {
            color: Color::from_hex(palette::BLUE),
            opacity: 0.3,
        }
    }

    pub fn fill(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }
}
