//! Integration tests for the per-swing scoring pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Decode captures from the capture pipeline's JSON
//! 2. Score percentile, tempo, efficiency and attack angle
//! 3. Classify motor profile and diagnose the leak
//! 4. Derive 4B components and grade the composite
//! 5. Summarize the batch as a session

use swingmetrics::metrics::analytics::Leak;
use swingmetrics::metrics::attack_angle::AttackAngleZone;
use swingmetrics::metrics::axis_stability::AxisStabilityKind;
use swingmetrics::{
    AgeGroup, EngineConfig, MotorProfile, SourceFidelity, SwingAnalyzer, SwingCapture,
    SwingFeatureVector,
};

/// High-school swing with clean, quick, efficient mechanics.
fn reference_swing() -> SwingFeatureVector {
    SwingFeatureVector {
        bat_speed_mph: Some(72.0),
        attack_angle_deg: Some(11.0),
        trigger_to_impact_ms: Some(148.0),
        speed_efficiency_pct: Some(88.0),
        hand_cast_distance_in: Some(5.0),
        distance_in_zone_in: Some(14.0),
        ..Default::default()
    }
}

#[test]
fn test_reference_high_school_swing() {
    let analyzer = SwingAnalyzer::default();
    let analysis = analyzer.analyze(&SwingCapture::sensor(reference_swing(), AgeGroup::HighSchool));

    assert_eq!(analysis.motor_profile, MotorProfile::Whipper);
    assert_eq!(analysis.motor_profile_confidence, 70);
    assert_eq!(analysis.tempo_score, 98);
    assert_eq!(analysis.efficiency_rating, 87);
    assert!((analysis.bat_speed_percentile - 81.0).abs() < 0.01);
    assert_eq!(analysis.attack_angle_zone, AttackAngleZone::Optimal);
    assert_eq!(analysis.leak, Some(Leak::CleanTransfer));
    assert!(analysis.axis_stability.is_none());
    assert_eq!(analysis.strengths.len(), 3);
    assert!(analysis.improvements.is_empty());

    // Body has no inputs (neutral 50), Brain = tempo, Bat = mean(81, 87),
    // Ball = mean(85, 14/18 zone coverage)
    let c = analysis.four_b.components;
    assert_eq!(c.body, 50.0);
    assert_eq!(c.brain, 98.0);
    assert!((c.bat - 84.0).abs() < 0.01);
    assert!((c.ball - 81.39).abs() < 0.01);
    assert!(!analysis.four_b.capped);
    assert!((analysis.composite() - 76.08).abs() < 0.01);
    assert_eq!(analysis.four_b.grade, "Plus-Plus");
}

#[test]
fn test_full_sensor_swing_scores_body() {
    let features = SwingFeatureVector {
        cog_velocity_y: Some(0.1),
        pelvis_angular_velocity: Some(600.0),
        trunk_angular_velocity: Some(850.0),
        arm_angular_velocity: Some(1100.0),
        ..reference_swing()
    };
    let analysis =
        SwingAnalyzer::default().analyze(&SwingCapture::sensor(features, AgeGroup::HighSchool));

    let axis = analysis.axis_stability.as_ref().unwrap();
    assert_eq!(axis.kind, AxisStabilityKind::Stable);
    assert_eq!(axis.score, 92);

    // mean(92 axis, 100 sequence, 600/700 pelvis)
    assert!((analysis.four_b.components.body - 92.57).abs() < 0.01);
    assert_eq!(analysis.leak, Some(Leak::CleanTransfer));
}

#[test]
fn test_leaky_swing_gets_drills() {
    let features = SwingFeatureVector {
        bat_speed_mph: Some(58.0),
        attack_angle_deg: Some(3.0),
        trigger_to_impact_ms: Some(190.0),
        speed_efficiency_pct: Some(62.0),
        hand_cast_distance_in: Some(10.0),
        distance_in_zone_in: Some(9.0),
        ..Default::default()
    };
    let analysis =
        SwingAnalyzer::default().analyze(&SwingCapture::sensor(features, AgeGroup::HighSchool));

    assert_eq!(analysis.leak, Some(Leak::Cast));
    assert_eq!(analysis.attack_angle_zone, AttackAngleZone::Flat);
    assert!(analysis
        .drill_recommendations
        .iter()
        .any(|d| d == "Fence Drill"));
    assert!(analysis
        .drill_recommendations
        .iter()
        .any(|d| d == "Low Tee Launch Drill"));
    assert!(!analysis.improvements.is_empty());

    let mut unique = analysis.drill_recommendations.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), analysis.drill_recommendations.len());
}

#[test]
fn test_vision_fidelity_caps_brain_and_ball() {
    let analyzer = SwingAnalyzer::default();
    let sensor = analyzer.analyze(&SwingCapture::sensor(reference_swing(), AgeGroup::HighSchool));
    let vision = analyzer.analyze(&SwingCapture::vision(reference_swing(), AgeGroup::HighSchool));

    assert_eq!(vision.source_fidelity, SourceFidelity::Vision2d);
    assert!(vision.four_b.capped);
    assert_eq!(vision.four_b.components.brain, 55.0);
    assert_eq!(vision.four_b.components.ball, 50.0);
    assert!(vision.composite() < sensor.composite());
    // Per-metric scores are not capped
    assert_eq!(vision.tempo_score, sensor.tempo_score);
}

#[test]
fn test_age_group_changes_percentile() {
    let analyzer = SwingAnalyzer::default();
    let features = SwingFeatureVector {
        bat_speed_mph: Some(60.0),
        ..Default::default()
    };

    let youth = analyzer.analyze(&SwingCapture::sensor(features, AgeGroup::U12));
    let pro = analyzer.analyze(&SwingCapture::sensor(features, AgeGroup::Pro));

    assert!((youth.bat_speed_percentile - 87.0).abs() < 0.01);
    assert!(pro.bat_speed_percentile < 10.0);
}

#[test]
fn test_capture_without_age_group_uses_configured_default() {
    let config = EngineConfig {
        default_age_group: AgeGroup::U12,
        ..Default::default()
    };
    let analyzer = SwingAnalyzer::new(config);

    let captures: Vec<SwingCapture> =
        serde_json::from_str(r#"[{"features": {"batSpeedMph": 60.0}}]"#).unwrap();
    let analyses = analyzer.analyze_batch(&captures);

    assert_eq!(analyses[0].age_group, AgeGroup::U12);
    assert!((analyses[0].bat_speed_percentile - 87.0).abs() < 0.01);
}

#[test]
fn test_batch_from_json_and_summary() {
    let json = r#"[
        {"features": {"batSpeedMph": 72.0, "attackAngleDeg": 11.0, "triggerToImpactMs": 148.0,
                      "speedEfficiencyPct": 88.0, "handCastDistanceIn": 5.0, "distanceInZoneIn": 14.0},
         "ageGroup": "HS"},
        {"features": {"batSpeedMph": 68.0, "triggerToImpactMs": 152.0}, "ageGroup": "HS"},
        {"features": {"batSpeedMph": 14.0}, "ageGroup": "HS"}
    ]"#;
    let captures: Vec<SwingCapture> = serde_json::from_str(json).unwrap();
    let analyzer = SwingAnalyzer::default();

    let analyses = analyzer.analyze_batch(&captures);
    let summary = analyzer.summarize(&analyses);

    assert_eq!(analyses.len(), 3);
    assert_eq!(summary.total_swings, 3);
    assert_eq!(summary.valid_swings, 2);
    assert_eq!(summary.avg_bat_speed, Some(70.0));
    assert_eq!(summary.max_bat_speed, Some(72.0));
    assert_eq!(summary.avg_trigger_to_impact, Some(150.0));
    // Mean 70, stddev 2, CV 2/70
    assert_eq!(summary.consistency_score, 94);
}

#[test]
fn test_analysis_serializes_for_persistence() {
    let analysis = SwingAnalyzer::default()
        .analyze(&SwingCapture::sensor(reference_swing(), AgeGroup::HighSchool));

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["motorProfile"], "WHIPPER");
    assert_eq!(json["leak"], "CLEAN_TRANSFER");
    assert_eq!(json["ageGroup"], "HS");
    assert_eq!(json["attackAngleZone"], "optimal");
    assert_eq!(json["sourceFidelity"], "sensor");
}
