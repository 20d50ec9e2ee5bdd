//! Attack angle zone analysis.

use serde::{Deserialize, Serialize};

/// Lower bound of the optimal attack angle window (degrees).
pub const OPTIMAL_MIN_DEG: f32 = 8.0;
/// Upper bound of the optimal attack angle window (degrees).
pub const OPTIMAL_MAX_DEG: f32 = 15.0;

/// Attack angle zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackAngleZone {
    /// Below 8 degrees
    Flat,
    /// 8-15 degrees
    Optimal,
    /// Above 15 degrees
    Steep,
}

impl AttackAngleZone {
    /// Classify an angle into its zone.
    pub fn from_angle(angle_deg: f32) -> Self {
        if angle_deg < OPTIMAL_MIN_DEG {
            AttackAngleZone::Flat
        } else if angle_deg > OPTIMAL_MAX_DEG {
            AttackAngleZone::Steep
        } else {
            AttackAngleZone::Optimal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttackAngleZone::Flat => "Flat",
            AttackAngleZone::Optimal => "Optimal",
            AttackAngleZone::Steep => "Steep",
        }
    }
}

impl std::fmt::Display for AttackAngleZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of analyzing a single attack angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackAngleAnalysis {
    /// Whether the zone is optimal
    pub optimal: bool,
    /// Zone classification
    pub zone: AttackAngleZone,
    /// Coaching feedback
    pub feedback: String,
    /// False when no angle was captured
    pub measured: bool,
}

/// Analyze an attack angle measurement.
///
/// A missing angle reports the Optimal zone with "no data" feedback so that
/// display layers keep a neutral label; `measured` tells the two apart.
pub fn analyze_attack_angle(angle_deg: Option<f32>) -> AttackAngleAnalysis {
    let Some(angle) = angle_deg else {
        return AttackAngleAnalysis {
            optimal: true,
            zone: AttackAngleZone::Optimal,
            feedback: "No attack angle data captured".to_string(),
            measured: false,
        };
    };

    let zone = AttackAngleZone::from_angle(angle);
    let feedback = match zone {
        AttackAngleZone::Optimal => format!(
            "Attack angle of {:.1}° is in the optimal {}-{}° window",
            angle, OPTIMAL_MIN_DEG, OPTIMAL_MAX_DEG
        ),
        AttackAngleZone::Flat => format!(
            "Attack angle of {:.1}° is flat - increase launch angle by getting on plane earlier",
            angle
        ),
        AttackAngleZone::Steep => format!(
            "Attack angle of {:.1}° is steep - flatten swing path through the zone",
            angle
        ),
    };

    AttackAngleAnalysis {
        optimal: zone == AttackAngleZone::Optimal,
        zone,
        feedback,
        measured: true,
    }
}
