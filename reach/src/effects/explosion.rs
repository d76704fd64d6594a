use std::time::Duration;

use glam::Vec3;
use rand::Rng;

use super::{Effect, EffectContext, EffectLayer, EffectParticle, EffectState, ParticleId};
use crate::material::Material;

pub const SPARK_COUNT: usize = 50;
const SPARK_RADIUS: f32 = 0.05;
const SPARK_SPEED: f32 = 0.2;
const GRAVITY_PER_FRAME: f32 = 0.001;
const PEAK_OPACITY: f32 = 0.8;

/// A burst of sparks. Advanced per frame rather than per unit of time; the
/// whole batch is removed together once every spark has burnt out.
#[derive(Debug, Clone)]
pub struct ExplosionEffect {
    sparks: Vec<ParticleId>,
}

impl ExplosionEffect {
    pub fn spawn(layer: &mut EffectLayer, position: Vec3, color: u32, rng: &mut impl Rng) -> Self {
        let half = SPARK_SPEED / 2.0;
        let sparks = (0..SPARK_COUNT)
            .map(|_| {
                let mut spark = EffectParticle::new(position, SPARK_RADIUS, Material::spark(color));
                spark.velocity = Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                );
                spark.decay = rng.gen_range(0.01..0.03);
                layer.spawn(spark)
            })
            .collect();
        Self { sparks }
    }

    pub fn sparks(&self) -> &[ParticleId] {
        &self.sparks
    }
}

impl Effect for ExplosionEffect {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn advance(&mut self, _now: Duration, ctx: &mut EffectContext<'_>) -> EffectState {
        let mut all_dead = true;

        for id in &self.sparks {
            let Some(spark) = ctx.layer.get_mut(*id) else {
                continue;
            };
            if !spark.is_alive() {
                continue;
            }
            all_dead = false;

            spark.position += spark.velocity;
            spark.velocity.y -= GRAVITY_PER_FRAME;
            spark.life -= spark.decay;
            spark.material.opacity = spark.life * PEAK_OPACITY;
            spark.scale = spark.life;
        }

        if all_dead {
            for id in self.sparks.drain(..) {
                ctx.layer.remove(id);
            }
            EffectState::Finished
        } else {
            EffectState::Running
        }
    }
}
