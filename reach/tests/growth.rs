use reach::core::clock::ManualClock;
use reach::{ContainerSize, SceneCommand, SceneConfig, SceneEngine, StaticHost};

fn engine() -> (SceneEngine, ManualClock) {
    let host = StaticHost::new().with_container("threejs-container", ContainerSize::new(1024, 768));
    let clock = ManualClock::new();
    let engine = SceneEngine::attach_with_clock(&host, SceneConfig::default().with_seed(21), clock.clone());
    (engine, clock)
}

#[test]
fn grow_adds_exactly_k_nodes_and_leaves_the_rest_alone() {
    let (mut engine, _clock) = engine();
    let before = engine.network().expect("attached").clone();

    assert!(engine.grow_network(7).is_applied());

    let after = engine.network().expect("attached");
    assert_eq!(after.len(), before.len() + 7);
    assert_eq!(after.edges, before.edges);
    for (old, new) in before.nodes.iter().zip(&after.nodes) {
        assert_eq!(old.position, new.position);
        assert_eq!(old.connections, new.connections);
    }
    for grown in &after.nodes[before.len()..] {
        assert!(grown.connections.is_empty());
        assert_eq!(grown.reveal, 0.0);
        assert_eq!(grown.material.opacity, 0.0);
    }
}

#[test]
fn grown_nodes_sit_near_an_existing_node() {
    let (mut engine, _clock) = engine();
    let initial = engine.network().expect("attached").len();
    engine.grow_network(25);

    let network = engine.network().expect("attached");
    for (offset, grown) in network.nodes[initial..].iter().enumerate() {
        // Jitter is at most 2 per axis around some earlier node.
        let near = network.nodes[..initial + offset]
            .iter()
            .any(|other| (other.position - grown.position).abs().max_element() <= 2.0);
        assert!(near, "grown node {offset} is not near any earlier node");
    }
}

#[test]
fn grown_nodes_fade_in_over_one_second() {
    let (mut engine, clock) = engine();
    let initial = engine.network().expect("attached").len();
    engine.apply(SceneCommand::grow());

    clock.advance_ms(500);
    engine.frame();
    for node in &engine.network().expect("attached").nodes[initial..] {
        assert!((node.reveal - 0.5).abs() < 1e-4);
        assert!((node.material.opacity - 0.4).abs() < 1e-4);
    }

    clock.advance_ms(500);
    engine.frame();
    let network = engine.network().expect("attached");
    assert_eq!(network.len(), initial + SceneCommand::DEFAULT_GROWTH);
    for node in &network.nodes[initial..] {
        assert_eq!(node.reveal, 1.0);
        assert!((node.material.opacity - 0.8).abs() < 1e-6);
    }
    assert_eq!(engine.active_effects(), 0);
}

#[test]
fn growing_zero_nodes_is_a_no_op() {
    let (mut engine, _clock) = engine();
    let before = engine.network().expect("attached").len();
    assert!(engine.grow_network(0).is_applied());
    assert_eq!(engine.network().expect("attached").len(), before);
    assert_eq!(engine.active_effects(), 0);
}

#[test]
fn growing_an_empty_network_places_nodes_around_the_origin() {
    let host = StaticHost::new().with_container("threejs-container", ContainerSize::new(640, 480));
    let mut config = SceneConfig::default().with_seed(2);
    config.network.node_count = 0;
    let mut engine = SceneEngine::attach(&host, config);

    engine.grow_network(3);
    let network = engine.network().expect("attached");
    assert_eq!(network.len(), 3);
    // The first node can only be jittered around the origin.
    assert!(network.nodes[0].position.abs().max_element() <= 2.0);
}
