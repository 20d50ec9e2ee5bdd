//! Swing efficiency rating.
//!
//! Averages whatever efficiency indicators are present into a single 0-100
//! rating. Absent indicators are skipped rather than zero-filled.

/// Rating returned when no indicator is present.
pub const NEUTRAL_EFFICIENCY_RATING: u8 = 50;

/// Hitting-zone distance (in) that earns a full score.
const FULL_ZONE_DISTANCE_IN: f32 = 18.0;

/// Combine efficiency indicators into a 0-100 rating.
pub fn efficiency_rating(
    speed_efficiency: Option<f32>,
    approach_angle: Option<f32>,
    distance_in_zone: Option<f32>,
    hand_cast_distance: Option<f32>,
) -> u8 {
    let factors = [
        speed_efficiency.map(|v| v.clamp(0.0, 100.0)),
        approach_angle.map(approach_angle_score),
        distance_in_zone.map(zone_coverage_score),
        hand_cast_distance.map(hand_cast_score),
    ];

    let (sum, count) = factors
        .iter()
        .flatten()
        .fold((0.0f32, 0u32), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return NEUTRAL_EFFICIENCY_RATING;
    }

    (sum / count as f32).clamp(0.0, 100.0).round() as u8
}

/// Bucketed score for the barrel's approach angle.
pub fn approach_angle_score(angle: f32) -> f32 {
    if (8.0..=15.0).contains(&angle) {
        90.0
    } else if (5.0..=18.0).contains(&angle) {
        70.0
    } else if (0.0..=25.0).contains(&angle) {
        50.0
    } else {
        30.0
    }
}

/// Score for barrel distance in the hitting zone, 18in or more is full marks.
pub fn zone_coverage_score(distance_in: f32) -> f32 {
    ((distance_in / FULL_ZONE_DISTANCE_IN) * 100.0).clamp(0.0, 100.0)
}

/// Score for hand cast distance; casting beyond 4in costs 8 points per inch.
pub fn hand_cast_score(distance_in: f32) -> f32 {
    (100.0 - (distance_in - 4.0) * 8.0).clamp(0.0, 100.0)
}
