use std::f32::consts::PI;
use std::time::Duration;

use super::{Effect, EffectContext, EffectLayer, EffectParticle, EffectState, ParticleId, progress};
use crate::material::Material;

pub const FLOW_DURATION: Duration = Duration::from_millis(2000);
const FLOW_RADIUS: f32 = 0.1;
const PULSES: f32 = 10.0;
const PULSE_AMPLITUDE: f32 = 0.5;

/// A single particle travelling from one node to another.
#[derive(Debug, Clone)]
pub struct DataFlowEffect {
    particle: ParticleId,
    from: usize,
    to: usize,
    started_at: Duration,
}

impl DataFlowEffect {
    pub fn spawn(
        layer: &mut EffectLayer,
        from: usize,
        to: usize,
        origin: glam::Vec3,
        now: Duration,
    ) -> Self {
        let particle = layer.spawn(EffectParticle::new(
            origin,
            FLOW_RADIUS,
            Material::flow_particle(),
        ));
        Self {
            particle,
            from,
            to,
            started_at: now,
        }
    }

    pub fn particle(&self) -> ParticleId {
        self.particle
    }
}

impl Effect for DataFlowEffect {
    fn name(&self) -> &'static str {
        "data-flow"
    }

    fn advance(&mut self, now: Duration, ctx: &mut EffectContext<'_>) -> EffectState {
        let progress = progress(self.started_at, now, FLOW_DURATION);

        // Endpoints are read live so the particle follows floating nodes.
        let endpoints = ctx
            .network
            .nodes
            .get(self.from)
            .zip(ctx.network.nodes.get(self.to))
            .map(|(from, to)| (from.position, to.position));

        if let (Some((start, end)), Some(particle)) = (endpoints, ctx.layer.get_mut(self.particle))
        {
            particle.position = start.lerp(end, progress);
            particle.scale = 1.0 + (progress * PI * PULSES).sin() * PULSE_AMPLITUDE;
        }

        if progress < 1.0 {
            EffectState::Running
        } else {
            ctx.layer.remove(self.particle);
            EffectState::Finished
        }
    }
}
