//! Energy leak detection.
//!
//! A leak is a named mechanical inefficiency. Sensor swings are diagnosed from
//! thresholds here; vision swings carry a label chosen by the vision service.

use serde::{Deserialize, Serialize};

use crate::metrics::axis_stability::{AxisStability, AxisStabilityKind};
use crate::swing::SwingFeatureVector;

/// Hand cast distance (in) that counts as casting.
const CAST_THRESHOLD_IN: f32 = 8.0;

/// Minimum trunk-to-pelvis velocity gain for good separation.
const MIN_SEPARATION_GAIN: f32 = 1.2;

/// Named energy leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Leak {
    /// Hands push away from the body early
    Cast,
    /// Back side collapses under the hitter
    Collapse,
    /// Weight drifts forward onto the front side
    Lunge,
    /// Arms fire before the torso
    EarlyArms,
    /// Hips and torso rotate together
    PoorSeparation,
    /// Front side spins open
    SpinOut,
    /// No leak detected
    CleanTransfer,
}

impl Leak {
    /// All leaks in tie-break order.
    pub const ALL: [Leak; 7] = [
        Leak::Cast,
        Leak::Collapse,
        Leak::Lunge,
        Leak::EarlyArms,
        Leak::PoorSeparation,
        Leak::SpinOut,
        Leak::CleanTransfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Leak::Cast => "CAST",
            Leak::Collapse => "COLLAPSE",
            Leak::Lunge => "LUNGE",
            Leak::EarlyArms => "EARLY_ARMS",
            Leak::PoorSeparation => "POOR_SEPARATION",
            Leak::SpinOut => "SPIN_OUT",
            Leak::CleanTransfer => "CLEAN_TRANSFER",
        }
    }

    /// Parse a vision-service label, case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|leak| leak.label().eq_ignore_ascii_case(label))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Leak::Cast => "Cast",
            Leak::Collapse => "Collapse",
            Leak::Lunge => "Lunge",
            Leak::EarlyArms => "Early Arms",
            Leak::PoorSeparation => "Poor Separation",
            Leak::SpinOut => "Spin Out",
            Leak::CleanTransfer => "Clean Transfer",
        }
    }

    pub fn is_leak(&self) -> bool {
        !matches!(self, Leak::CleanTransfer)
    }

    /// Corrective drill, if any.
    pub fn drill(&self) -> Option<&'static str> {
        match self {
            Leak::Cast => Some("Fence Drill"),
            Leak::Collapse => Some("Back Knee Wall Drill"),
            Leak::Lunge => Some("Stride and Hold Drill"),
            Leak::EarlyArms => Some("Connection Ball Drill"),
            Leak::PoorSeparation => Some("Hip Lead Separation Drill"),
            Leak::SpinOut => Some("Front Side Post-Up Drill"),
            Leak::CleanTransfer => None,
        }
    }
}

impl std::fmt::Display for Leak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Diagnose the most significant leak from sensor measurements.
///
/// Rules are checked in order and the first that fires wins.
pub fn detect_leak(features: &SwingFeatureVector, axis: Option<&AxisStability>) -> Leak {
    if features
        .hand_cast_distance_in
        .is_some_and(|cast| cast > CAST_THRESHOLD_IN)
    {
        return Leak::Cast;
    }

    match axis.map(|a| a.kind) {
        Some(AxisStabilityKind::BackwardDrift) => return Leak::Collapse,
        Some(AxisStabilityKind::ForwardSpin) => return Leak::SpinOut,
        _ => {}
    }

    if features
        .cog_velocity_y
        .is_some_and(|v| v > 0.3 && v <= 0.8)
    {
        return Leak::Lunge;
    }

    if let (Some(trunk), Some(arm)) = (features.trunk_angular_velocity, features.arm_angular_velocity) {
        if arm < trunk {
            return Leak::EarlyArms;
        }
    }

    if let (Some(pelvis), Some(trunk)) =
        (features.pelvis_angular_velocity, features.trunk_angular_velocity)
    {
        if pelvis > 0.0 && trunk / pelvis < MIN_SEPARATION_GAIN {
            return Leak::PoorSeparation;
        }
    }

    Leak::CleanTransfer
}
