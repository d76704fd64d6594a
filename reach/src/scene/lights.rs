use glam::Vec3;

use crate::core::color::{Color, palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Direction the light travels, pointing at the origin.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or(Vec3::NEG_Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Zero means unlimited range.
    pub distance: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereLight {
    pub sky: Color,
    pub ground: Color,
    pub intensity: f32,
}

/// The fixed four-light rig of the hero scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub hemisphere: HemisphereLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::from_hex(palette::WHITE),
                intensity: 0.5,
            },
            directional: DirectionalLight {
                color: Color::from_hex(palette::BLUE),
                intensity: 0.8,
                position: Vec3::new(5.0, 5.0, 5.0),
                cast_shadow: true,
            },
            point: PointLight {
                color: Color::from_hex(palette::VIOLET),
                intensity: 0.6,
                distance: 100.0,
                position: Vec3::new(-5.0, -5.0, 5.0),
            },
            hemisphere: HemisphereLight {
                sky: Color::from_hex(palette::BLUE),
                ground: Color::from_hex(palette::PINK),
                intensity: 0.3,
            },
        }
    }
}
