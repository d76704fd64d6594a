use std::ops::Range;
use std::time::Duration;

use super::{Effect, EffectContext, EffectState, progress};

pub const GROWTH_DURATION: Duration = Duration::from_millis(1000);
const FULL_OPACITY: f32 = 0.8;

/// Fades and scales in a batch of freshly appended nodes.
#[derive(Debug, Clone)]
pub struct GrowthEffect {
    nodes: Range<usize>,
    started_at: Duration,
}

impl GrowthEffect {
    pub fn new(nodes: Range<usize>, now: Duration) -> Self {
        Self {
            nodes,
            started_at: now,
        }
    }
}

impl Effect for GrowthEffect {
    fn name(&self) -> &'static str {
        "growth"
    }

    fn advance(&mut self, now: Duration, ctx: &mut EffectContext<'_>) -> EffectState {
        let progress = progress(self.started_at, now, GROWTH_DURATION);

        for node in ctx.network.nodes[self.nodes.clone()].iter_mut() {
            node.reveal = progress;
            node.material.opacity = progress * FULL_OPACITY;
        }

        if progress < 1.0 {
            EffectState::Running
        } else {
            EffectState::Finished
        }
    }
}
