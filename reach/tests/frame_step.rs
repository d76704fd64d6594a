use std::time::Duration;

use glam::Vec3;
use reach::core::clock::ManualClock;
use reach::{ContainerSize, SceneConfig, SceneEngine, StaticHost};

const EPS: f32 = 1e-4;

fn engine(seed: u64) -> (SceneEngine, ManualClock) {
    let host = StaticHost::new().with_container("threejs-container", ContainerSize::new(800, 600));
    let clock = ManualClock::new();
    let engine = SceneEngine::attach_with_clock(&host, SceneConfig::default().with_seed(seed), clock.clone());
    (engine, clock)
}

/// Runs `frames` frames spaced `step` apart and returns the final scene time.
fn run(engine: &mut SceneEngine, clock: &ManualClock, step: Duration, frames: u32) -> f32 {
    for _ in 0..frames {
        clock.advance(step);
        engine.frame();
    }
    (step * frames).as_secs_f32()
}

#[test]
fn nodes_float_pulse_and_spin() {
    let (mut engine, clock) = engine(3);
    let t = run(&mut engine, &clock, Duration::from_millis(16), 45);

    let network = engine.network().expect("attached");
    for (i, node) in network.nodes.iter().enumerate() {
        let expected_y = node.rest_y + (t + i as f32).sin() * node.amplitude;
        assert!((node.position.y - expected_y).abs() < EPS, "node {i} y");

        let expected_scale = 1.0 + (t * 2.0 + i as f32).sin() * 0.1;
        assert!((node.scale - expected_scale).abs() < EPS, "node {i} scale");

        assert!((node.rotation.x - 0.45).abs() < EPS);
        assert!((node.rotation.y - 0.45).abs() < EPS);
        assert_eq!(node.rotation.z, 0.0);
    }
}

#[test]
fn node_float_swings_through_its_range_without_sticking_at_the_edges() {
    let (mut engine, clock) = engine(1);
    let step = Duration::from_micros(16_667);
    run(&mut engine, &clock, step, 600);

    let count = engine.network().expect("attached").len();
    let mut at_edge = 0usize;
    let mut samples = 0usize;
    let mut highest = vec![f32::MIN; count];
    let mut lowest = vec![f32::MAX; count];

    for _ in 0..1200 {
        clock.advance(step);
        engine.frame();
        for (i, node) in engine.network().expect("attached").nodes.iter().enumerate() {
            let offset = node.position.y - node.rest_y;
            assert!(offset.abs() <= node.amplitude + EPS, "node {i} left its range");
            if offset.abs() >= node.amplitude * 0.999 {
                at_edge += 1;
            }
            highest[i] = highest[i].max(offset / node.amplitude);
            lowest[i] = lowest[i].min(offset / node.amplitude);
            samples += 1;
        }
    }

    // A sine spends about 3% of its cycle within 0.1% of a peak.
    assert!(at_edge * 20 < samples, "{at_edge}/{samples} samples at the edge");
    for i in 0..count {
        assert!(highest[i] > 0.9 && lowest[i] < -0.9, "node {i} did not swing");
    }
}

#[test]
fn node_height_depends_on_time_not_frame_rate() {
    let (mut slow, slow_clock) = engine(8);
    let (mut fast, fast_clock) = engine(8);

    run(&mut slow, &slow_clock, Duration::from_millis(40), 25);
    run(&mut fast, &fast_clock, Duration::from_millis(10), 100);

    let slow_nodes = &slow.network().expect("attached").nodes;
    let fast_nodes = &fast.network().expect("attached").nodes;
    for (a, b) in slow_nodes.iter().zip(fast_nodes) {
        assert!((a.position.y - b.position.y).abs() < EPS);
        assert!((a.scale - b.scale).abs() < EPS);
    }
}

#[test]
fn ambient_particles_bob_around_their_base_and_spin() {
    let (mut engine, clock) = engine(4);
    let t = run(&mut engine, &clock, Duration::from_millis(20), 30);

    let field = engine.field().expect("attached");
    assert!(!field.is_empty());
    for (i, particle) in field.particles.iter().enumerate() {
        let expected =
            particle.base_y + (t * particle.speed * 10.0 + i as f32).sin() * particle.amplitude;
        assert!((particle.position.y - expected).abs() < EPS, "particle {i} y");
        assert!((particle.rotation.x - 0.6).abs() < EPS);
        assert!((particle.rotation.y - 0.6).abs() < EPS);
    }
}

#[test]
fn shapes_tumble_and_float_a_little_each_frame() {
    let (mut engine, clock) = engine(2);
    run(&mut engine, &clock, Duration::from_millis(16), 9);
    let before: Vec<Vec3> = engine
        .shapes()
        .expect("attached")
        .shapes
        .iter()
        .map(|shape| shape.position)
        .collect();

    clock.advance(Duration::from_millis(16));
    engine.frame();
    let t = Duration::from_millis(160).as_secs_f32();

    let shapes = &engine.shapes().expect("attached").shapes;
    assert_eq!(shapes.len(), 3);
    for (i, shape) in shapes.iter().enumerate() {
        let expected_step = (t + i as f32).sin() * 0.01;
        assert!((shape.position.y - before[i].y - expected_step).abs() < 1e-5, "shape {i} float");
        assert_eq!(shape.position.x, before[i].x);
        assert_eq!(shape.position.z, before[i].z);

        let spin = Vec3::new(0.005, 0.005, 0.002) * 10.0;
        assert!((shape.rotation - spin).abs().max_element() < EPS, "shape {i} spin");
    }
}
