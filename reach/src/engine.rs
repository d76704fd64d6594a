use std::time::Duration;

use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SceneConfig;
use crate::control::{CommandQueue, SceneCommand};
use crate::core::clock::{Clock, FrameTiming, SystemClock};
use crate::draw::DrawList;
use crate::effects::{
    DataFlowEffect, EffectContext, EffectLayer, EffectQueue, ExplosionEffect, GrowthEffect,
    HighlightEffect,
};
use crate::field::{PARTICLE_RADIUS, ParticleField};
use crate::host::{ContainerHost, ContainerSize};
use crate::network::Network;
use crate::scene::{OrbitControls, SceneState};
use crate::shapes::ShapeSet;

/// Result of a trigger call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Applied,
    Skipped(SkipReason),
}

impl TriggerOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TriggerOutcome::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The engine was attached to a container that does not exist.
    Inert,
    /// The container disappeared after attach.
    ContainerMissing,
    NodeOutOfRange { index: usize, len: usize },
}

struct World {
    state: SceneState,
    network: Network,
    field: ParticleField,
    shapes: ShapeSet,
    orbit: OrbitControls,
    effects: EffectQueue,
    layer: EffectLayer,
    rng: StdRng,
    clock: Box<dyn Clock>,
    started_at: Duration,
    last_frame: Duration,
    timing: FrameTiming,
    frame_count: u64,
    draw: DrawList,
}

/// The hero-scene engine.
///
/// Attaching to a container that does not exist yields an inert engine: every
/// call is accepted and does nothing, triggers report
/// [`SkipReason::Inert`].
pub struct SceneEngine {
    container_id: String,
    world: Option<World>,
}

impl SceneEngine {
    pub fn attach(host: &dyn ContainerHost, config: SceneConfig) -> Self {
        Self::attach_with_clock(host, config, SystemClock::new())
    }

    pub fn attach_with_clock(
        host: &dyn ContainerHost,
        config: SceneConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        let container_id = config.container_id.clone();
        let Some(size) = host.container_size(&container_id) else {
            tracing::debug!(target: "engine", container = %container_id, "container missing, engine inert");
            return Self {
                container_id,
                world: None,
            };
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let state = SceneState::new(&config, size);
        let network = Network::generate(&config.network, &mut rng);
        let field = ParticleField::generate(&config.field, &mut rng);
        let shapes = ShapeSet::default();
        let orbit = OrbitControls::new(&config.orbit);
        let started_at = clock.now();

        tracing::info!(
            target: "engine",
            container = %container_id,
            width = size.width,
            height = size.height,
            nodes = network.len(),
            edges = network.edges.len(),
            particles = field.len(),
            "scene attached"
        );

        Self {
            container_id,
            world: Some(World {
                state,
                network,
                field,
                shapes,
                orbit,
                effects: EffectQueue::new(),
                layer: EffectLayer::new(),
                rng,
                clock: Box::new(clock),
                started_at,
                last_frame: started_at,
                timing: FrameTiming::default(),
                frame_count: 0,
                draw: DrawList::default(),
            }),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_inert(&self) -> bool {
        self.world.is_none()
    }

    /// Advances the scene by one display frame and returns what to draw.
    pub fn frame(&mut self) -> Option<&DrawList> {
        let world = self.world.as_mut()?;
        let now = world.clock.now();
        let t = now.saturating_sub(world.started_at).as_secs_f32();

        world.timing = FrameTiming::between(world.last_frame, now);
        world.last_frame = now;

        world.network.animate(t);
        world.field.animate(t);
        world.shapes.animate(t);

        let mut ctx = EffectContext {
            network: &mut world.network,
            layer: &mut world.layer,
        };
        world.effects.advance(now, &mut ctx);

        world.orbit.update(&mut world.state.camera);
        world.rebuild_draw_list();
        world.frame_count += 1;

        tracing::trace!(
            target: "engine",
            frame = world.frame_count,
            effects = world.effects.len(),
            sparks = world.layer.len(),
            "frame"
        );

        Some(&world.draw)
    }

    /// Re-reads the container size and updates camera aspect and surface.
    pub fn handle_resize(&mut self, host: &dyn ContainerHost) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return TriggerOutcome::Skipped(SkipReason::Inert);
        };
        match host.container_size(&self.container_id) {
            Some(size) => {
                world.state.resize(size);
                tracing::debug!(target: "engine", width = size.width, height = size.height, "resized");
                TriggerOutcome::Applied
            }
            None => TriggerOutcome::Skipped(SkipReason::ContainerMissing),
        }
    }

    pub fn resize(&mut self, size: ContainerSize) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return TriggerOutcome::Skipped(SkipReason::Inert);
        };
        world.state.resize(size);
        TriggerOutcome::Applied
    }

    /// Pointer drag in pixels, fed to the orbit controls.
    pub fn orbit_drag(&mut self, dx: f32, dy: f32) {
        if let Some(world) = self.world.as_mut() {
            let height = world.state.surface.size.height;
            world.orbit.drag(dx, dy, height);
        }
    }

    pub fn highlight(&mut self, index: usize) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return skipped(SkipReason::Inert);
        };
        let len = world.network.len();
        let Some(node) = world.network.nodes.get_mut(index) else {
            return skipped(SkipReason::NodeOutOfRange { index, len });
        };
        let now = world.clock.now();
        world.effects.add(HighlightEffect::apply(index, node, now));
        TriggerOutcome::Applied
    }

    pub fn data_flow(&mut self, from: usize, to: usize) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return skipped(SkipReason::Inert);
        };
        let len = world.network.len();
        for index in [from, to] {
            if !world.network.contains(index) {
                return skipped(SkipReason::NodeOutOfRange { index, len });
            }
        }
        let origin = world.network.nodes[from].position;
        let now = world.clock.now();
        let effect = DataFlowEffect::spawn(&mut world.layer, from, to, origin, now);
        world.effects.add(effect);
        TriggerOutcome::Applied
    }

    pub fn explosion(&mut self, position: Vec3, color: u32) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return skipped(SkipReason::Inert);
        };
        let effect = ExplosionEffect::spawn(&mut world.layer, position, color, &mut world.rng);
        world.effects.add(effect);
        TriggerOutcome::Applied
    }

    pub fn grow_network(&mut self, count: usize) -> TriggerOutcome {
        let Some(world) = self.world.as_mut() else {
            return skipped(SkipReason::Inert);
        };
        let grown = world.network.grow(count, &mut world.rng);
        tracing::debug!(target: "engine", added = count, total = world.network.len(), "network grown");
        if !grown.is_empty() {
            let now = world.clock.now();
            world.effects.add(GrowthEffect::new(grown, now));
        }
        TriggerOutcome::Applied
    }

    pub fn apply(&mut self, command: SceneCommand) -> TriggerOutcome {
        match command {
            SceneCommand::Highlight(index) => self.highlight(index),
            SceneCommand::DataFlow { from, to } => self.data_flow(from, to),
            SceneCommand::Explosion { position, color } => self.explosion(position, color),
            SceneCommand::GrowNetwork(count) => self.grow_network(count),
        }
    }

    /// Applies every queued command; returns how many were applied.
    pub fn drain_commands(&mut self, queue: &CommandQueue) -> usize {
        queue
            .drain()
            .map(|command| self.apply(command))
            .filter(TriggerOutcome::is_applied)
            .count()
    }

    pub fn network(&self) -> Option<&Network> {
        self.world.as_ref().map(|world| &world.network)
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.world.as_ref().map(|world| &world.field)
    }

    pub fn shapes(&self) -> Option<&ShapeSet> {
        self.world.as_ref().map(|world| &world.shapes)
    }

    pub fn state(&self) -> Option<&SceneState> {
        self.world.as_ref().map(|world| &world.state)
    }

    pub fn orbit(&self) -> Option<&OrbitControls> {
        self.world.as_ref().map(|world| &world.orbit)
    }

    pub fn effect_layer(&self) -> Option<&EffectLayer> {
        self.world.as_ref().map(|world| &world.layer)
    }

    pub fn active_effects(&self) -> usize {
        self.world.as_ref().map_or(0, |world| world.effects.len())
    }

    /// Effect particles currently attached to the scene.
    pub fn effect_particles(&self) -> usize {
        self.world.as_ref().map_or(0, |world| world.layer.len())
    }

    pub fn draw_list(&self) -> Option<&DrawList> {
        self.world.as_ref().map(|world| &world.draw)
    }

    pub fn frame_count(&self) -> u64 {
        self.world.as_ref().map_or(0, |world| world.frame_count)
    }

    pub fn timing(&self) -> FrameTiming {
        self.world
            .as_ref()
            .map_or(FrameTiming::default(), |world| world.timing)
    }
}

fn skipped(reason: SkipReason) -> TriggerOutcome {
    tracing::debug!(target: "engine", ?reason, "trigger skipped");
    TriggerOutcome::Skipped(reason)
}

impl World {
    fn rebuild_draw_list(&mut self) {
        let draw = &mut self.draw;
        draw.begin(&self.state.camera, &self.state.lights);

        let link = self.network.line_material.fill();
        for edge in &self.network.edges {
            draw.segment(edge.from, edge.to, link);
        }

        for shape in &self.shapes.shapes {
            let color = shape.material.fill();
            for [a, b] in shape.world_segments() {
                draw.segment(a, b, color);
            }
        }

        for node in &self.network.nodes {
            draw.sphere(node.position, node.radius(), &node.material);
        }

        for particle in &self.field.particles {
            draw.sphere(particle.position, PARTICLE_RADIUS, &self.field.material);
        }

        for particle in self.layer.iter() {
            draw.sphere(particle.position, particle.radius * particle.scale, &particle.material);
        }

        draw.finish();
    }
}
