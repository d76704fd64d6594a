use glam::Vec3;
use reach::core::clock::ManualClock;
use reach::core::color::palette;
use reach::panel::ControlPanel;
use reach::{CommandQueue, ContainerSize, SceneCommand, SceneConfig, SceneEngine, StaticHost};

#[test]
fn panel_buttons_map_to_the_site_triggers() {
    let panel = ControlPanel::default();
    let buttons = panel.layout(1280.0, 720.0);

    let labels: Vec<_> = buttons.iter().map(|b| b.label).collect();
    assert_eq!(labels, ["Grow Network", "Explosion", "Data Flow"]);
    assert_eq!(buttons[0].command, SceneCommand::GrowNetwork(5));
    assert_eq!(
        buttons[1].command,
        SceneCommand::Explosion {
            position: Vec3::ZERO,
            color: palette::PINK
        }
    );
    assert_eq!(buttons[2].command, SceneCommand::DataFlow { from: 0, to: 5 });
}

#[test]
fn panel_is_pinned_to_the_bottom_right() {
    let panel = ControlPanel::default();
    let buttons = panel.layout(1000.0, 500.0);
    let last = buttons.last().expect("buttons");

    assert!((last.rect.x + last.rect.width - (1000.0 - panel.margin)).abs() < 1e-3);
    for button in &buttons {
        assert!((button.rect.y + button.rect.height - (500.0 - panel.margin)).abs() < 1e-3);
    }
    for pair in buttons.windows(2) {
        let gap = pair[1].rect.x - (pair[0].rect.x + pair[0].rect.width);
        assert!((gap - panel.gap).abs() < 1e-3);
    }
}

#[test]
fn hit_test_finds_the_button_under_the_pointer() {
    let panel = ControlPanel::default();
    let buttons = panel.layout(800.0, 600.0);
    let explosion = &buttons[1].rect;

    let hit = panel.hit_test(
        800.0,
        600.0,
        explosion.x + explosion.width / 2.0,
        explosion.y + explosion.height / 2.0,
    );
    assert_eq!(hit, Some(buttons[1].command.clone()));
    assert_eq!(panel.hit_test(800.0, 600.0, 5.0, 5.0), None);
}

#[test]
fn hovered_buttons_are_fully_opaque() {
    let panel = ControlPanel::default();
    let button = &panel.layout(800.0, 600.0)[0];
    assert_eq!(button.background(true).a, 1.0);
    assert!((button.background(false).a - 0.8).abs() < 1e-6);
}

#[test]
fn drained_commands_reach_the_engine_in_order() {
    let host = StaticHost::new().with_container("threejs-container", ContainerSize::new(800, 600));
    let mut engine =
        SceneEngine::attach_with_clock(&host, SceneConfig::default().with_seed(4), ManualClock::new());
    let initial = engine.network().expect("attached").len();

    let (queue, sender) = CommandQueue::new();
    let ui = sender.clone();
    ui.send(SceneCommand::grow());
    sender.send(SceneCommand::explosion_at(Vec3::ZERO));
    sender.send(SceneCommand::Highlight(initial + 100));
    ui.send(SceneCommand::DataFlow { from: 0, to: 5 });

    // The out-of-range highlight is skipped.
    assert_eq!(engine.drain_commands(&queue), 3);
    assert_eq!(engine.network().expect("attached").len(), initial + 5);
    assert_eq!(engine.effect_particles(), 50 + 1);
    assert_eq!(engine.drain_commands(&queue), 0);
}

#[test]
fn sending_after_the_queue_is_gone_is_harmless() {
    let (queue, sender) = CommandQueue::new();
    drop(queue);
    sender.send(SceneCommand::grow());
}
