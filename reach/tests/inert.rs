use glam::Vec3;
use reach::core::clock::ManualClock;
use reach::{
    CommandQueue, ContainerSize, SceneCommand, SceneConfig, SceneEngine, SkipReason, StaticHost,
    TriggerOutcome,
};

fn inert() -> SceneEngine {
    let host = StaticHost::new().with_container("some-other-element", ContainerSize::new(800, 600));
    SceneEngine::attach_with_clock(&host, SceneConfig::default(), ManualClock::new())
}

#[test]
fn missing_container_yields_an_inert_engine() {
    let mut engine = inert();

    assert!(engine.is_inert());
    assert_eq!(engine.container_id(), "threejs-container");
    assert!(engine.frame().is_none());
    assert!(engine.network().is_none());
    assert!(engine.state().is_none());
    assert!(engine.draw_list().is_none());
    assert_eq!(engine.frame_count(), 0);
}

#[test]
fn every_trigger_is_skipped_without_panicking() {
    let mut engine = inert();
    let skipped = TriggerOutcome::Skipped(SkipReason::Inert);

    assert_eq!(engine.highlight(0), skipped);
    assert_eq!(engine.data_flow(0, 5), skipped);
    assert_eq!(engine.explosion(Vec3::ZERO, 0xEC4899), skipped);
    assert_eq!(engine.grow_network(5), skipped);
    assert_eq!(engine.apply(SceneCommand::grow()), skipped);
    assert_eq!(engine.resize(ContainerSize::new(10, 10)), skipped);
    assert_eq!(engine.handle_resize(&StaticHost::new()), skipped);
    engine.orbit_drag(100.0, 100.0);

    assert_eq!(engine.effect_particles(), 0);
    assert_eq!(engine.active_effects(), 0);
}

#[test]
fn container_appearing_later_does_not_revive_the_engine() {
    let mut host = StaticHost::new();
    let mut engine = SceneEngine::attach_with_clock(&host, SceneConfig::default(), ManualClock::new());

    host.insert("threejs-container", ContainerSize::new(800, 600));
    assert_eq!(
        engine.handle_resize(&host),
        TriggerOutcome::Skipped(SkipReason::Inert)
    );
    assert!(engine.frame().is_none());
}

#[test]
fn queued_commands_on_an_inert_engine_are_all_dropped() {
    let mut engine = inert();
    let (queue, sender) = CommandQueue::new();
    sender.send(SceneCommand::Highlight(1));
    sender.send(SceneCommand::DataFlow { from: 0, to: 1 });

    assert_eq!(engine.drain_commands(&queue), 0);
    assert!(queue.try_recv().is_none());
}
