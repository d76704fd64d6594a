use rand::SeedableRng;
use rand::rngs::StdRng;
use reach::config::NetworkConfig;
use reach::network::{Network, sphere_point};
use reach::{ContainerSize, SceneConfig, SceneEngine, StaticHost};

fn host() -> StaticHost {
    StaticHost::new().with_container("threejs-container", ContainerSize::new(1280, 720))
}

#[test]
fn nodes_lie_on_the_generation_sphere() {
    let config = NetworkConfig::default();
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let network = Network::generate(&config, &mut rng);

        assert_eq!(network.len(), config.node_count);
        for node in &network.nodes {
            let distance = node.position.length();
            assert!(
                (distance - config.radius).abs() < 1e-4,
                "node at distance {distance}, expected {}",
                config.radius
            );
        }
    }
}

#[test]
fn edges_join_distinct_valid_nodes_within_link_distance() {
    let config = NetworkConfig::default();
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let network = Network::generate(&config, &mut rng);

        for edge in &network.edges {
            assert_ne!(edge.a, edge.b);
            assert!(edge.a < network.len() && edge.b < network.len());

            let a = network.nodes[edge.a].position;
            let b = network.nodes[edge.b].position;
            assert!(a.distance(b) < config.link_distance);
            assert_eq!(edge.from, a);
            assert_eq!(edge.to, b);

            assert!(network.nodes[edge.a].connections.contains(&edge.b));
            assert!(network.nodes[edge.b].connections.contains(&edge.a));
        }
    }
}

#[test]
fn tight_link_distance_produces_no_far_edges() {
    let config = NetworkConfig {
        node_count: 40,
        link_distance: 4.0,
        link_cutoff: 0.0,
        ..NetworkConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let network = Network::generate(&config, &mut rng);

    for i in 0..network.len() {
        for j in (i + 1)..network.len() {
            let distance = network.nodes[i].position.distance(network.nodes[j].position);
            let linked = network.edges.iter().any(|e| e.a == i && e.b == j);
            if distance >= config.link_distance {
                assert!(!linked, "nodes {i} and {j} are {distance} apart but linked");
            }
        }
    }
}

#[test]
fn cutoff_of_one_yields_no_edges() {
    let config = NetworkConfig {
        link_cutoff: 1.0,
        ..NetworkConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let network = Network::generate(&config, &mut rng);
    assert!(network.edges.is_empty());
}

#[test]
fn seeded_generation_is_reproducible() {
    let config = SceneConfig::default().with_seed(42);
    let first = SceneEngine::attach(&host(), config.clone());
    let second = SceneEngine::attach(&host(), config);

    let a = first.network().expect("attached");
    let b = second.network().expect("attached");
    assert_eq!(a.edges, b.edges);
    for (x, y) in a.nodes.iter().zip(&b.nodes) {
        assert_eq!(x.position, y.position);
    }
}

#[test]
fn sphere_samples_cover_both_hemispheres() {
    let mut rng = StdRng::seed_from_u64(11);
    let points: Vec<_> = (0..500).map(|_| sphere_point(1.0, &mut rng)).collect();
    let north = points.iter().filter(|p| p.z > 0.0).count();
    // Uniform on the sphere: about half above the equator.
    assert!(north > 200 && north < 300, "north count {north}");
}
