//! Rotational axis stability from center-of-gravity lateral velocity.
//!
//! The category thresholds and the score curve are parameterized separately:
//! the category depends on sign and magnitude, the score only on magnitude.
//! A value of 0.5 is Developing yet scores 60, the same as -0.5 which already
//! sits on the BackwardDrift boundary.

use serde::{Deserialize, Serialize};

/// Axis stability category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisStabilityKind {
    /// COG stays centered through rotation
    Stable,
    /// COG drifts back toward the catcher
    BackwardDrift,
    /// COG lunges forward and the axis spins open
    ForwardSpin,
    /// Between stable and a clear fault
    Developing,
}

impl AxisStabilityKind {
    /// Classify a COG lateral velocity.
    pub fn from_cog_velocity(cog_velocity_y: f32) -> Self {
        if cog_velocity_y < -0.5 {
            AxisStabilityKind::BackwardDrift
        } else if cog_velocity_y > 0.8 {
            AxisStabilityKind::ForwardSpin
        } else if (-0.1..=0.3).contains(&cog_velocity_y) {
            AxisStabilityKind::Stable
        } else {
            AxisStabilityKind::Developing
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AxisStabilityKind::Stable => "Stable",
            AxisStabilityKind::BackwardDrift => "Backward Drift",
            AxisStabilityKind::ForwardSpin => "Forward Spin",
            AxisStabilityKind::Developing => "Developing",
        }
    }

    /// What the category means.
    pub fn note(&self) -> &'static str {
        match self {
            AxisStabilityKind::Stable => "Axis stays centered while the hips and torso rotate",
            AxisStabilityKind::BackwardDrift => {
                "Weight drifts toward the catcher, collapsing the back side"
            }
            AxisStabilityKind::ForwardSpin => {
                "Weight lunges forward and the front side spins open early"
            }
            AxisStabilityKind::Developing => "Some axis movement during rotation",
        }
    }

    /// Short coaching cue.
    pub fn cue(&self) -> &'static str {
        match self {
            AxisStabilityKind::Stable => "Keep rotating around a fixed spine",
            AxisStabilityKind::BackwardDrift => "Stay stacked over the back hip, not behind it",
            AxisStabilityKind::ForwardSpin => "Land soft and let the hips turn against a firm front side",
            AxisStabilityKind::Developing => "Feel the head stay quiet from load to contact",
        }
    }
}

impl std::fmt::Display for AxisStabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Axis stability classification with a 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStability {
    #[serde(rename = "type")]
    pub kind: AxisStabilityKind,
    pub score: u8,
    pub note: String,
    pub cue: String,
}

/// Classify axis stability from COG lateral velocity.
pub fn classify_axis_stability(cog_velocity_y: f32) -> AxisStability {
    let kind = AxisStabilityKind::from_cog_velocity(cog_velocity_y);

    AxisStability {
        kind,
        score: axis_stability_score(cog_velocity_y),
        note: kind.note().to_string(),
        cue: kind.cue().to_string(),
    }
}

/// Score from deviation magnitude alone: 100 at zero, minus 80 per unit.
pub fn axis_stability_score(cog_velocity_y: f32) -> u8 {
    (100.0 - cog_velocity_y.abs() * 80.0).clamp(0.0, 100.0).round() as u8
}
