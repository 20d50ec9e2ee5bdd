//! Swing capture input types.
//!
//! Every measurement is optional because capture sources are lossy: the 3D
//! sensor path fills most fields, the 2D vision path only a handful.

use serde::{Deserialize, Serialize};

/// Raw per-swing measurements from the capture pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwingFeatureVector {
    /// Barrel speed at impact (mph)
    pub bat_speed_mph: Option<f32>,
    /// Peak hand speed (mph)
    pub hand_speed_mph: Option<f32>,
    /// Attack angle in degrees, negative = chop
    pub attack_angle_deg: Option<f32>,
    /// Trigger to impact (ms)
    pub trigger_to_impact_ms: Option<f32>,
    /// Hand-to-barrel speed transfer (0-100)
    pub speed_efficiency_pct: Option<f32>,
    /// Hand cast distance (in)
    pub hand_cast_distance_in: Option<f32>,
    /// Barrel distance traveled in the hitting zone (in)
    pub distance_in_zone_in: Option<f32>,
    /// Peak acceleration (g)
    pub peak_acceleration_g: Option<f32>,
    pub impact_momentum: Option<f32>,
    pub applied_power: Option<f32>,
    /// Peak pelvis angular velocity (deg/s)
    pub pelvis_angular_velocity: Option<f32>,
    /// Peak trunk angular velocity (deg/s)
    pub trunk_angular_velocity: Option<f32>,
    /// Peak lead-arm angular velocity (deg/s)
    pub arm_angular_velocity: Option<f32>,
    /// Center-of-gravity lateral velocity
    pub cog_velocity_y: Option<f32>,
}

impl SwingFeatureVector {
    /// Bat speed, if it was measured as a positive value.
    pub fn measured_bat_speed(&self) -> Option<f32> {
        self.bat_speed_mph.filter(|v| *v > 0.0)
    }
}

/// Development tier used to index benchmark tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "8U")]
    U8,
    #[serde(rename = "10U")]
    U10,
    #[serde(rename = "12U")]
    U12,
    #[serde(rename = "14U")]
    U14,
    /// High school (default)
    #[default]
    #[serde(rename = "HS")]
    HighSchool,
    #[serde(rename = "College")]
    College,
    #[serde(rename = "Pro")]
    Pro,
}

impl AgeGroup {
    /// All age groups, youngest first.
    pub const ALL: [AgeGroup; 7] = [
        AgeGroup::U8,
        AgeGroup::U10,
        AgeGroup::U12,
        AgeGroup::U14,
        AgeGroup::HighSchool,
        AgeGroup::College,
        AgeGroup::Pro,
    ];

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::U8 => "8U",
            AgeGroup::U10 => "10U",
            AgeGroup::U12 => "12U",
            AgeGroup::U14 => "14U",
            AgeGroup::HighSchool => "HS",
            AgeGroup::College => "College",
            AgeGroup::Pro => "Pro",
        }
    }

    /// Parse a report label, case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a swing's measurements came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFidelity {
    /// Full 3D sensor capture
    #[default]
    Sensor,
    /// Estimate from 2D video frames
    Vision2d,
}

impl SourceFidelity {
    /// Whether downstream Brain/Ball caps apply.
    pub fn is_estimate(&self) -> bool {
        matches!(self, SourceFidelity::Vision2d)
    }
}

impl std::fmt::Display for SourceFidelity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFidelity::Sensor => write!(f, "sensor"),
            SourceFidelity::Vision2d => write!(f, "vision2d"),
        }
    }
}

/// One swing as delivered by the capture pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingCapture {
    /// Raw measurements
    pub features: SwingFeatureVector,
    /// Development tier; the engine default applies when absent
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    /// Data provenance
    #[serde(default)]
    pub source_fidelity: SourceFidelity,
}

impl SwingCapture {
    /// Sensor capture for the given age group.
    pub fn sensor(features: SwingFeatureVector, age_group: AgeGroup) -> Self {
        Self {
            features,
            age_group: Some(age_group),
            source_fidelity: SourceFidelity::Sensor,
        }
    }

    /// 2D vision estimate for the given age group.
    pub fn vision(features: SwingFeatureVector, age_group: AgeGroup) -> Self {
        Self {
            features,
            age_group: Some(age_group),
            source_fidelity: SourceFidelity::Vision2d,
        }
    }
}
