//! Unit tests for the efficiency rating.

use swingmetrics::metrics::efficiency::{
    approach_angle_score, efficiency_rating, hand_cast_score, zone_coverage_score,
};

#[test]
fn test_absent_factors_are_skipped() {
    // Only zone coverage present: 9in of 18in
    assert_eq!(efficiency_rating(None, None, Some(9.0), None), 50);
    // Zone 18in (100) and cast 4in (100)
    assert_eq!(efficiency_rating(None, None, Some(18.0), Some(4.0)), 100);
}

#[test]
fn test_approach_angle_buckets() {
    assert_eq!(approach_angle_score(8.0), 90.0);
    assert_eq!(approach_angle_score(15.0), 90.0);
    assert_eq!(approach_angle_score(6.0), 70.0);
    assert_eq!(approach_angle_score(17.5), 70.0);
    assert_eq!(approach_angle_score(0.0), 50.0);
    assert_eq!(approach_angle_score(22.0), 50.0);
    assert_eq!(approach_angle_score(-3.0), 30.0);
    assert_eq!(approach_angle_score(30.0), 30.0);
}

#[test]
fn test_zone_coverage_clamps() {
    assert_eq!(zone_coverage_score(24.0), 100.0);
    assert_eq!(zone_coverage_score(-1.0), 0.0);
}

#[test]
fn test_hand_cast_score() {
    assert_eq!(hand_cast_score(4.0), 100.0);
    assert_eq!(hand_cast_score(9.0), 60.0);
    assert_eq!(hand_cast_score(20.0), 0.0);
    assert_eq!(hand_cast_score(1.0), 100.0);
}

#[test]
fn test_speed_efficiency_out_of_range_is_clamped() {
    assert_eq!(efficiency_rating(Some(140.0), None, None, None), 100);
    assert_eq!(efficiency_rating(Some(-20.0), None, None, None), 0);
}

#[test]
fn test_caster_rates_below_connected_swing() {
    let connected = efficiency_rating(Some(85.0), Some(10.0), Some(15.0), Some(4.5));
    let caster = efficiency_rating(Some(70.0), Some(2.0), Some(10.0), Some(11.0));
    assert!(connected > caster);
    assert!(caster < 60);
}
