//! Trigger effects.
//!
//! Each trigger becomes a small state machine implementing [`Effect`]. The
//! engine keeps them in an [`EffectQueue`] and advances all of them once per
//! frame; an effect that reports [`EffectState::Finished`] is dropped and must
//! already have removed every particle it spawned.

pub mod explosion;
pub mod flow;
pub mod growth;
pub mod highlight;

use std::collections::BTreeMap;
use std::time::Duration;

use glam::Vec3;

use crate::material::Material;
use crate::network::Network;

pub use explosion::ExplosionEffect;
pub use flow::DataFlowEffect;
pub use growth::GrowthEffect;
pub use highlight::HighlightEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(u64);

/// Short-lived particle owned by one effect.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub decay: f32,
    pub scale: f32,
    pub radius: f32,
    pub material: Material,
}

impl EffectParticle {
    pub fn new(position: Vec3, radius: f32, material: Material) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            life: 1.0,
            decay: 0.0,
            scale: 1.0,
            radius,
            material,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// The scene's container for effect particles. Effects insert and remove
/// through it; ids are never reused.
#[derive(Debug, Default)]
pub struct EffectLayer {
    next_id: u64,
    particles: BTreeMap<ParticleId, EffectParticle>,
}

impl EffectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, particle: EffectParticle) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.insert(id, particle);
        id
    }

    pub fn get(&self, id: ParticleId) -> Option<&EffectParticle> {
        self.particles.get(&id)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut EffectParticle> {
        self.particles.get_mut(&id)
    }

    pub fn remove(&mut self, id: ParticleId) -> Option<EffectParticle> {
        self.particles.remove(&id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectParticle> {
        self.particles.values()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectState {
    Running,
    Finished,
}

/// What an effect may touch while advancing.
pub struct EffectContext<'a> {
    pub network: &'a mut Network,
    pub layer: &'a mut EffectLayer,
}

pub trait Effect {
    fn name(&self) -> &'static str;

    /// Advances one frame. `now` comes from the engine clock.
    fn advance(&mut self, now: Duration, ctx: &mut EffectContext<'_>) -> EffectState;
}

/// Effects currently in flight.
#[derive(Default)]
pub struct EffectQueue {
    active: Vec<Box<dyn Effect>>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: impl Effect + 'static) {
        tracing::debug!(target: "effects", effect = effect.name(), "effect started");
        self.active.push(Box::new(effect));
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn advance(&mut self, now: Duration, ctx: &mut EffectContext<'_>) {
        self.active.retain_mut(|effect| match effect.advance(now, ctx) {
            EffectState::Running => true,
            EffectState::Finished => {
                tracing::debug!(target: "effects", effect = effect.name(), "effect finished");
                false
            }
        });
    }
}

/// Linear progress in [0, 1] of a timed effect.
pub fn progress(started_at: Duration, now: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}
