use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::camera::PerspectiveCamera;
use crate::config::OrbitConfig;

const EPS: f32 = 1e-6;

/// Radius/polar/azimuth around the orbit target. Polar is measured from +Y,
/// azimuth from +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keeps the polar angle off the poles.
    fn make_safe(&mut self) {
        self.phi = self.phi.clamp(EPS, PI - EPS);
    }
}

/// Damped orbit around a fixed target: rotation only, no zoom and no pan.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    delta: Spherical,
}

impl OrbitControls {
    pub fn new(config: &OrbitConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            damping: config.damping,
            auto_rotate: true,
            auto_rotate_speed: config.auto_rotate_speed,
            rotate_speed: 1.0,
            min_polar: config.min_polar,
            max_polar: config.max_polar,
            delta: Spherical::default(),
        }
    }

    /// One full turn every 60 seconds at speed 1, assuming 60 frames/s.
    fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Pointer drag in pixels; a drag across the full viewport height turns
    /// the camera once around.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: u32) {
        let height = viewport_height.max(1) as f32;
        self.rotate_left(TAU * dx / height * self.rotate_speed);
        self.rotate_up(TAU * dy / height * self.rotate_speed);
    }

    /// Applies pending rotation to the camera and decays it.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let offset = camera.position - self.target;
        let mut spherical = Spherical::from_offset(offset);

        if self.auto_rotate {
            self.rotate_left(self.auto_rotation_angle());
        }

        spherical.theta += self.delta.theta * self.damping;
        spherical.phi += self.delta.phi * self.damping;
        spherical.phi = spherical.phi.clamp(self.min_polar, self.max_polar);
        spherical.make_safe();

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        self.delta.theta *= 1.0 - self.damping;
        self.delta.phi *= 1.0 - self.damping;
    }

    /// Current polar angle of the camera around the target.
    pub fn polar_angle(&self, camera: &PerspectiveCamera) -> f32 {
        Spherical::from_offset(camera.position - self.target).phi
    }
}
