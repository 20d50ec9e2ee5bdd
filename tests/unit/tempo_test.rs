//! Unit tests for tempo scoring.

use swingmetrics::metrics::benchmarks::TimingWindow;
use swingmetrics::metrics::tempo::{tempo_label, tempo_score, tempo_score_for_window};
use swingmetrics::AgeGroup;

#[test]
fn test_ideal_time_scores_100_for_every_group() {
    for group in AgeGroup::ALL {
        let window = TimingWindow::for_age_group(group);
        assert_eq!(tempo_score(Some(window.ideal_ms), group), 100, "{}", group);
    }
}

#[test]
fn test_zone_boundaries_high_school() {
    // HS ideal is 150ms
    assert_eq!(tempo_score(Some(155.0), AgeGroup::HighSchool), 95);
    assert_eq!(tempo_score(Some(165.0), AgeGroup::HighSchool), 80);
    assert_eq!(tempo_score(Some(160.0), AgeGroup::HighSchool), 85);
}

#[test]
fn test_out_of_window_penalty_is_asymmetric() {
    // Both are 18ms off ideal, but only 132ms falls outside the 135-170 window
    let early = tempo_score(Some(132.0), AgeGroup::HighSchool);
    let late = tempo_score(Some(168.0), AgeGroup::HighSchool);

    assert_eq!(late, 68);
    assert_eq!(early, 58);
}

#[test]
fn test_far_from_ideal_decays_to_floor() {
    // Floor of 20 minus the out-of-window penalty
    assert_eq!(tempo_score(Some(300.0), AgeGroup::HighSchool), 10);
}

#[test]
fn test_missing_timing_is_neutral() {
    assert_eq!(tempo_score(None, AgeGroup::U10), 50);
    assert_eq!(tempo_score(Some(0.0), AgeGroup::U10), 50);
}

#[test]
fn test_custom_window() {
    let window = TimingWindow {
        ideal_ms: 200.0,
        min_ms: 180.0,
        max_ms: 230.0,
    };
    assert_eq!(tempo_score_for_window(Some(203.0), &window), 97);
    assert!(window.contains(180.0));
    assert!(!window.contains(231.0));
}

#[test]
fn test_tempo_labels() {
    assert_eq!(tempo_label(98), "Excellent");
    assert_eq!(tempo_label(80), "Good");
    assert_eq!(tempo_label(68), "Fair");
    assert_eq!(tempo_label(10), "Needs Work");
}
