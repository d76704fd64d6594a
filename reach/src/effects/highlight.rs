use std::time::Duration;

use super::{Effect, EffectContext, EffectState};
use crate::material::Material;
use crate::network::Node;

pub const HIGHLIGHT_HOLD: Duration = Duration::from_millis(2000);

/// Pending revert of a highlighted node.
#[derive(Debug, Clone)]
pub struct HighlightEffect {
    node: usize,
    revert_at: Duration,
}

impl HighlightEffect {
    /// Swaps the node to the highlight material, keeping the first snapshot of
    /// its own material, and schedules the revert.
    pub fn apply(node_index: usize, node: &mut Node, now: Duration) -> Self {
        if node.original_material.is_none() {
            node.original_material = Some(node.material);
        }
        node.material = Material::highlight();
        Self {
            node: node_index,
            revert_at: now + HIGHLIGHT_HOLD,
        }
    }
}

impl Effect for HighlightEffect {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn advance(&mut self, now: Duration, ctx: &mut EffectContext<'_>) -> EffectState {
        if now < self.revert_at {
            return EffectState::Running;
        }
        if let Some(node) = ctx.network.nodes.get_mut(self.node) {
            if let Some(original) = node.original_material {
                node.material = original;
            }
        }
        EffectState::Finished
    }
}
