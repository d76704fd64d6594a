use reach::core::clock::ManualClock;
use reach::material::Material;
use reach::{ContainerSize, SceneConfig, SceneEngine, SkipReason, StaticHost, TriggerOutcome};

fn engine() -> (SceneEngine, ManualClock) {
    let host = StaticHost::new().with_container("threejs-container", ContainerSize::new(800, 600));
    let clock = ManualClock::new();
    let engine = SceneEngine::attach_with_clock(&host, SceneConfig::default().with_seed(9), clock.clone());
    (engine, clock)
}

fn material_of(engine: &SceneEngine, index: usize) -> Material {
    engine.network().expect("attached").nodes[index].material
}

#[test]
fn highlight_reverts_after_two_seconds() {
    let (mut engine, clock) = engine();
    let before = material_of(&engine, 3);

    assert_eq!(engine.highlight(3), TriggerOutcome::Applied);
    assert_eq!(material_of(&engine, 3), Material::highlight());

    clock.advance_ms(1999);
    engine.frame();
    assert_eq!(material_of(&engine, 3), Material::highlight());

    clock.advance_ms(1);
    engine.frame();
    assert_eq!(material_of(&engine, 3), before);
    assert_eq!(engine.active_effects(), 0);
}

#[test]
fn repeated_highlight_keeps_first_snapshot() {
    let (mut engine, clock) = engine();
    let before = material_of(&engine, 0);

    engine.highlight(0);
    clock.advance_ms(500);
    engine.frame();
    engine.highlight(0);

    let node = &engine.network().expect("attached").nodes[0];
    assert_eq!(node.original_material, Some(before));

    // The first revert fires at 2000 ms regardless of the second highlight.
    clock.advance_ms(1500);
    engine.frame();
    assert_eq!(material_of(&engine, 0), before);

    clock.advance_ms(500);
    engine.frame();
    assert_eq!(material_of(&engine, 0), before);
    assert_eq!(engine.active_effects(), 0);
}

#[test]
fn out_of_range_highlight_changes_nothing() {
    let (mut engine, _clock) = engine();
    let len = engine.network().expect("attached").len();
    let before = engine.network().expect("attached").clone();

    assert_eq!(
        engine.highlight(len),
        TriggerOutcome::Skipped(SkipReason::NodeOutOfRange { index: len, len })
    );
    assert_eq!(engine.network().expect("attached"), &before);
    assert_eq!(engine.active_effects(), 0);
}
