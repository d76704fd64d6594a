use std::f32::consts::FRAC_PI_4;

use reach::SceneConfig;

#[test]
fn empty_config_uses_site_defaults() {
    let config = SceneConfig::from_ron_str("()").expect("parse");
    assert_eq!(config, SceneConfig::default());
    assert_eq!(config.container_id, "threejs-container");
    assert_eq!(config.network.node_count, 20);
    assert_eq!(config.field.count, 100);
    assert_eq!(config.camera.position, [0.0, 5.0, 15.0]);
    assert_eq!(config.orbit.min_polar, FRAC_PI_4);
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let config = SceneConfig::from_ron_str(
        r#"(
            container_id: "hero",
            seed: Some(7),
            network: (node_count: 32),
            orbit: (auto_rotate_speed: 1.5),
        )"#,
    )
    .expect("parse");

    assert_eq!(config.container_id, "hero");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.network.node_count, 32);
    assert_eq!(config.network.radius, 8.0);
    assert_eq!(config.network.link_distance, 12.0);
    assert_eq!(config.orbit.auto_rotate_speed, 1.5);
    assert_eq!(config.orbit.damping, 0.05);
}

#[test]
fn pretty_output_parses_back() {
    let config = SceneConfig::default().with_seed(99).with_container("canvas");
    let text = config.to_ron_string().expect("serialize");
    assert_eq!(SceneConfig::from_ron_str(&text).expect("parse"), config);
}

#[test]
fn malformed_config_is_an_error() {
    let err = SceneConfig::from_ron_str("(network: (node_count: \"many\"))").unwrap_err();
    assert!(err.to_string().contains("invalid scene config"));
}

#[test]
fn missing_file_reports_the_path() {
    let err = SceneConfig::load("/definitely/not/here/scene.ron").unwrap_err();
    assert!(format!("{err:#}").contains("scene.ron"));
}
