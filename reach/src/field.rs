use glam::Vec3;
use rand::Rng;

use crate::config::FieldConfig;
use crate::material::Material;

pub const PARTICLE_RADIUS: f32 = 0.05;
const SPIN_PER_FRAME: f32 = 0.02;

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientParticle {
    pub position: Vec3,
    pub base_y: f32,
    pub speed: f32,
    pub amplitude: f32,
    /// Spun every frame; the draw list ignores it because particles are spheres.
    pub rotation: Vec3,
}

/// Background points bobbing around their spawn height.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<AmbientParticle>,
    pub material: Material,
}

impl ParticleField {
    pub fn generate(config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let extent = config.extent;
        let particles = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen_range(0.0f32..1.0) - 0.5) * extent * 2.0,
                    (rng.gen_range(0.0f32..1.0) - 0.5) * extent,
                    (rng.gen_range(0.0f32..1.0) - 0.5) * extent,
                );
                AmbientParticle {
                    position,
                    base_y: position.y,
                    speed: rng.gen_range(0.005..0.025),
                    amplitude: rng.gen_range(0.1..0.4),
                    rotation: Vec3::ZERO,
                }
            })
            .collect();

        Self {
            particles,
            material: Material::ambient_particle(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn animate(&mut self, t: f32) {
        for (i, particle) in self.particles.iter_mut().enumerate() {
            particle.position.y = particle.base_y
                + (t * particle.speed * 10.0 + i as f32).sin() * particle.amplitude;
            particle.rotation.x += SPIN_PER_FRAME;
            particle.rotation.y += SPIN_PER_FRAME;
        }
    }
}
