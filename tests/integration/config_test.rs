//! Integration tests for loading engine configuration from disk.

use swingmetrics::storage::config::{load_config_from, save_config_to, ConfigError};
use swingmetrics::{AgeGroup, EngineConfig, SwingAnalyzer, SwingCapture, SwingFeatureVector};
use tempfile::tempdir;

#[test]
fn test_config_drives_analyzer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_age_group = "Pro"

[composite.vision_caps]
brain = 40.0
ball = 40.0

[session]
waggle_floor_mph = 45.0
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.default_age_group, AgeGroup::Pro);
    assert_eq!(config.data_dir, dir.path());

    let analyzer = SwingAnalyzer::new(config);
    let features = SwingFeatureVector {
        bat_speed_mph: Some(40.0),
        trigger_to_impact_ms: Some(140.0),
        ..Default::default()
    };
    let captures = vec![
        SwingCapture {
            features,
            ..Default::default()
        },
        SwingCapture::vision(features, AgeGroup::HighSchool),
    ];
    let analyses = analyzer.analyze_batch(&captures);

    assert_eq!(analyses[0].age_group, AgeGroup::Pro);
    assert_eq!(analyses[1].four_b.components.brain, 40.0);
    assert_eq!(analyzer.summarize(&analyses).valid_swings, 0);
}

#[test]
fn test_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = EngineConfig::default();
    config.classifier.min_confidence = 40;
    config.session.waggle_floor_mph = 30.0;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.classifier.min_confidence, 40);
    assert_eq!(loaded.session.waggle_floor_mph, 30.0);
}

#[test]
fn test_invalid_weights_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[composite.weights]\nbody = 0.5\nbrain = 0.5\nbat = 0.5\nball = 0.5\n",
    )
    .unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));
}
