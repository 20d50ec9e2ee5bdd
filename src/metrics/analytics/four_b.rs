//! Derive 4B component scores from a scored sensor swing.
//!
//! - Brain: timing (tempo score)
//! - Body: ground-up sequence and axis control
//! - Bat: barrel speed and transfer efficiency
//! - Ball: contact-quality proxies (attack angle and zone coverage)

use crate::metrics::attack_angle::AttackAngleAnalysis;
use crate::metrics::axis_stability::AxisStability;
use crate::metrics::composite::{FourBComponents, NEUTRAL_COMPONENT};
use crate::metrics::efficiency::zone_coverage_score;
use crate::swing::SwingFeatureVector;

/// Pelvis angular velocity (deg/s) that earns a full score.
const ELITE_PELVIS_VELOCITY: f32 = 700.0;

/// Already-computed scores the components draw on.
#[derive(Debug, Clone, Copy)]
pub struct ComponentInputs<'a> {
    pub features: &'a SwingFeatureVector,
    pub tempo_score: u8,
    pub efficiency_rating: u8,
    /// None when bat speed was not measured
    pub bat_speed_percentile: Option<f32>,
    pub attack_angle: &'a AttackAngleAnalysis,
    pub axis_stability: Option<&'a AxisStability>,
}

/// Derive the four component scores.
pub fn derive_components(inputs: &ComponentInputs<'_>) -> FourBComponents {
    let brain = inputs.tempo_score as f32;

    let body = mean_or_neutral(&[
        inputs.axis_stability.map(|a| a.score as f32),
        kinematic_sequence_score(inputs.features),
        inputs
            .features
            .pelvis_angular_velocity
            .map(|v| (v / ELITE_PELVIS_VELOCITY * 100.0).clamp(0.0, 100.0)),
    ]);

    let bat = mean_or_neutral(&[
        inputs.bat_speed_percentile,
        Some(inputs.efficiency_rating as f32),
    ]);

    let ball = mean_or_neutral(&[
        inputs
            .attack_angle
            .measured
            .then(|| if inputs.attack_angle.optimal { 85.0 } else { 60.0 }),
        inputs.features.distance_in_zone_in.map(zone_coverage_score),
    ]);

    FourBComponents::new(body, brain, bat, ball)
}

/// Score the proximal-to-distal order of peak segment velocities.
///
/// Pelvis, then trunk, then arm is ideal (100). Two of the three ordered
/// pairs in sequence scores 70, anything else 40. Needs all three segments.
pub fn kinematic_sequence_score(features: &SwingFeatureVector) -> Option<f32> {
    let pelvis = features.pelvis_angular_velocity?;
    let trunk = features.trunk_angular_velocity?;
    let arm = features.arm_angular_velocity?;

    let in_order = [pelvis < trunk, trunk < arm, pelvis < arm]
        .iter()
        .filter(|ok| **ok)
        .count();

    Some(match in_order {
        3 => 100.0,
        2 => 70.0,
        _ => 40.0,
    })
}

fn mean_or_neutral(values: &[Option<f32>]) -> f32 {
    let present: Vec<f32> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return NEUTRAL_COMPONENT;
    }
    present.iter().sum::<f32>() / present.len() as f32
}
