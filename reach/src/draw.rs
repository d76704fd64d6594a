//! Per-frame hand-off from the engine to a renderer.

use glam::{Mat4, Vec3};

use crate::core::color::Color;
use crate::material::Material;
use crate::scene::{LightRig, PerspectiveCamera};

/// A lit, camera-facing sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    /// Emissive color premultiplied by its intensity.
    pub glow: Color,
    pub shininess: f32,
}

impl SphereInstance {
    pub fn new(center: Vec3, radius: f32, material: &Material) -> Self {
        Self {
            center,
            radius,
            color: material.fill(),
            glow: material.glow(),
            shininess: material.shininess,
        }
    }

    fn is_visible(&self) -> bool {
        self.radius > 0.0 && self.color.a > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineVertex {
    pub position: Vec3,
    pub color: Color,
}

/// Everything needed to present one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub lights: Option<LightRig>,
    /// Sorted back to front.
    pub spheres: Vec<SphereInstance>,
    /// Pairs of vertices, one pair per segment.
    pub lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn begin(&mut self, camera: &PerspectiveCamera, lights: &LightRig) {
        self.view_proj = camera.view_projection();
        self.eye = camera.position;
        self.right = camera.right();
        self.up = camera.billboard_up();
        self.lights = Some(lights.clone());
        self.spheres.clear();
        self.lines.clear();
    }

    pub fn sphere(&mut self, center: Vec3, radius: f32, material: &Material) {
        let instance = SphereInstance::new(center, radius, material);
        if instance.is_visible() {
            self.spheres.push(instance);
        }
    }

    pub fn segment(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.lines.push(LineVertex {
            position: from,
            color,
        });
        self.lines.push(LineVertex { position: to, color });
    }

    pub fn finish(&mut self) {
        let eye = self.eye;
        self.spheres.sort_by(|a, b| {
            let da = a.center.distance_squared(eye);
            let db = b.center.distance_squared(eye);
            db.total_cmp(&da)
        });
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }
}
