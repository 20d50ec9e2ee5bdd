//! Tempo scoring from trigger-to-impact timing.

use super::benchmarks::TimingWindow;
use crate::swing::AgeGroup;

/// Score returned when no timing data is available.
pub const NEUTRAL_TEMPO_SCORE: u8 = 50;

/// Penalty applied when the raw time falls outside the age group's window.
const OUT_OF_WINDOW_PENALTY: f32 = 10.0;

/// Score a trigger-to-impact time against the age group's ideal.
pub fn tempo_score(trigger_to_impact_ms: Option<f32>, age_group: AgeGroup) -> u8 {
    tempo_score_for_window(trigger_to_impact_ms, &TimingWindow::for_age_group(age_group))
}

/// Score a trigger-to-impact time against an explicit timing window.
///
/// Zones by distance from ideal: within 5ms scores 95-100, within 15ms 80-90,
/// within 30ms roughly 60-70, beyond that decays to a floor of 20. Missing or
/// non-positive timing is common on vision-only capture and scores a neutral 50.
pub fn tempo_score_for_window(trigger_to_impact_ms: Option<f32>, window: &TimingWindow) -> u8 {
    let ms = match trigger_to_impact_ms {
        Some(v) if v > 0.0 => v,
        _ => return NEUTRAL_TEMPO_SCORE,
    };

    let variance = (ms - window.ideal_ms).abs();
    let mut score = if variance <= 5.0 {
        95.0 + (5.0 - variance)
    } else if variance <= 15.0 {
        80.0 + (15.0 - variance)
    } else if variance <= 30.0 {
        60.0 + (30.0 - variance) * 0.67
    } else {
        (60.0 - (variance - 30.0) * 0.8).max(20.0)
    };

    if !window.contains(ms) {
        score -= OUT_OF_WINDOW_PENALTY;
    }

    score.clamp(0.0, 100.0).round() as u8
}

/// Display label for a tempo score.
pub fn tempo_label(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent",
        75..=89 => "Good",
        60..=74 => "Fair",
        _ => "Needs Work",
    }
}
