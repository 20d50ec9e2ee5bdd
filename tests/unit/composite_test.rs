//! Unit tests for 4B composite scoring and grading.

use swingmetrics::metrics::composite::{
    composite, composite_weighted, grade_label, CompositeWeights, FourBComponents, FourBScore,
    VisionCaps,
};
use swingmetrics::SourceFidelity;

#[test]
fn test_default_weights_sum_to_one() {
    let w = CompositeWeights::default();
    assert!((w.body + w.brain + w.bat + w.ball - 1.0).abs() < 0.001);
}

#[test]
fn test_uniform_components_pass_through() {
    assert!((composite(64.0, 64.0, 64.0, 64.0) - 64.0).abs() < 0.01);
}

#[test]
fn test_body_and_bat_outweigh_brain_and_ball() {
    let body_bat = composite(100.0, 0.0, 100.0, 0.0);
    let brain_ball = composite(0.0, 100.0, 0.0, 100.0);
    assert!((body_bat - 60.0).abs() < 0.01);
    assert!((brain_ball - 40.0).abs() < 0.01);
}

#[test]
fn test_custom_weights() {
    let weights = CompositeWeights {
        body: 0.25,
        brain: 0.25,
        bat: 0.25,
        ball: 0.25,
    };
    let score = composite_weighted(80.0, 40.0, 60.0, 20.0, &weights);
    assert!((score - 50.0).abs() < 0.01);
}

#[test]
fn test_grade_thresholds() {
    assert_eq!(grade_label(85.0), "Elite");
    assert_eq!(grade_label(80.0), "Elite");
    assert_eq!(grade_label(79.9), "Plus-Plus");
    assert_eq!(grade_label(60.0), "Plus");
    assert_eq!(grade_label(57.0), "Above Avg");
    assert_eq!(grade_label(45.0), "Average");
    assert_eq!(grade_label(42.0), "Fringe");
    assert_eq!(grade_label(30.0), "Below Avg");
    assert_eq!(grade_label(29.9), "Needs Work");
}

#[test]
fn test_components_are_clamped() {
    let c = FourBComponents::new(120.0, -5.0, 50.0, 100.0);
    assert_eq!(c.body, 100.0);
    assert_eq!(c.brain, 0.0);
}

#[test]
fn test_sensor_scores_are_never_capped() {
    let components = FourBComponents::new(70.0, 90.0, 70.0, 90.0);
    let score = FourBScore::score(
        components,
        SourceFidelity::Sensor,
        &CompositeWeights::default(),
        &VisionCaps::default(),
    );

    assert!(!score.capped);
    assert_eq!(score.components, components);
    // 21 + 18 + 21 + 18
    assert!((score.composite - 78.0).abs() < 0.01);
    assert_eq!(score.grade, "Plus-Plus");
}

#[test]
fn test_vision_caps_brain_and_ball() {
    let components = FourBComponents::new(70.0, 90.0, 70.0, 90.0);
    let score = FourBScore::score(
        components,
        SourceFidelity::Vision2d,
        &CompositeWeights::default(),
        &VisionCaps::default(),
    );

    assert!(score.capped);
    assert_eq!(score.components.brain, 55.0);
    assert_eq!(score.components.ball, 50.0);
    assert_eq!(score.components.body, 70.0);
    // 21 + 11 + 21 + 10
    assert!((score.composite - 63.0).abs() < 0.01);
}

#[test]
fn test_vision_below_caps_is_unchanged() {
    let components = FourBComponents::new(40.0, 45.0, 40.0, 30.0);
    let score = FourBScore::score(
        components,
        SourceFidelity::Vision2d,
        &CompositeWeights::default(),
        &VisionCaps::default(),
    );
    assert!(!score.capped);
    assert_eq!(score.components, components);
}
