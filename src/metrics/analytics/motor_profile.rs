//! Motor profile classification.
//!
//! Each named profile accrues points from the indicators that characterise it:
//! - Spinner: rotational swing with a long hand path (high cast)
//! - Whipper: efficient hand-to-barrel transfer with quick trigger
//! - Slingshotter: long barrel path through the zone with high bat speed
//! - Titan: elite speed, efficiency and zone coverage together
//!
//! The highest total wins. Ties go to the profile listed first, in the order
//! above. Totals below the evidence gate classify as Unknown.

use serde::{Deserialize, Serialize};

use crate::swing::SwingFeatureVector;

/// Swing-mechanics archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotorProfile {
    Spinner,
    Whipper,
    Slingshotter,
    Titan,
    /// Not enough evidence for a named profile.
    Unknown,
}

impl MotorProfile {
    /// Named profiles in tie-break order.
    pub const NAMED: [MotorProfile; 4] = [
        MotorProfile::Spinner,
        MotorProfile::Whipper,
        MotorProfile::Slingshotter,
        MotorProfile::Titan,
    ];

    /// Every profile in tie-break order, Unknown last.
    pub const ALL: [MotorProfile; 5] = [
        MotorProfile::Spinner,
        MotorProfile::Whipper,
        MotorProfile::Slingshotter,
        MotorProfile::Titan,
        MotorProfile::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MotorProfile::Spinner => "Spinner",
            MotorProfile::Whipper => "Whipper",
            MotorProfile::Slingshotter => "Slingshotter",
            MotorProfile::Titan => "Titan",
            MotorProfile::Unknown => "Unknown",
        }
    }

    /// Upper-case label used by the vision service.
    pub fn label(&self) -> &'static str {
        match self {
            MotorProfile::Spinner => "SPINNER",
            MotorProfile::Whipper => "WHIPPER",
            MotorProfile::Slingshotter => "SLINGSHOTTER",
            MotorProfile::Titan => "TITAN",
            MotorProfile::Unknown => "UNKNOWN",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|profile| profile.label().eq_ignore_ascii_case(label))
    }

    pub fn description(&self) -> &'static str {
        match self {
            MotorProfile::Spinner => "Rotation-dominant swing that generates speed from the torso",
            MotorProfile::Whipper => "Efficient, quick swing that whips the barrel through late",
            MotorProfile::Slingshotter => "Long, powerful barrel path that stays in the zone",
            MotorProfile::Titan => "Elite speed with efficient transfer and long zone coverage",
            MotorProfile::Unknown => "Not enough data to classify swing mechanics",
        }
    }

    /// Training emphasis for this profile.
    pub fn training_focus(&self) -> &'static str {
        match self {
            MotorProfile::Spinner => "Tighten the hand path to convert rotation into barrel speed",
            MotorProfile::Whipper => "Add strength and rotational power to raise top-end speed",
            MotorProfile::Slingshotter => "Sharpen timing so the long path is not late",
            MotorProfile::Titan => "Maintain mechanics and refine approach",
            MotorProfile::Unknown => "Capture more swings with full sensor data",
        }
    }
}

impl std::fmt::Display for MotorProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Minimum evidence required for a named profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Confidence (0-100) below which the result is Unknown
    pub min_confidence: u8,
    /// Raw score below which the result is Unknown
    pub min_score: u32,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            min_confidence: 25,
            min_score: 20,
        }
    }
}

/// Classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorProfileResult {
    pub profile: MotorProfile,
    /// 0-100
    pub confidence: u8,
}

impl MotorProfileResult {
    pub fn unknown() -> Self {
        Self {
            profile: MotorProfile::Unknown,
            confidence: 0,
        }
    }
}

/// Accumulated points per named profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScores {
    pub spinner: u32,
    pub whipper: u32,
    pub slingshotter: u32,
    pub titan: u32,
}

impl ProfileScores {
    /// Score for a named profile; Unknown has none.
    pub fn get(&self, profile: MotorProfile) -> u32 {
        match profile {
            MotorProfile::Spinner => self.spinner,
            MotorProfile::Whipper => self.whipper,
            MotorProfile::Slingshotter => self.slingshotter,
            MotorProfile::Titan => self.titan,
            MotorProfile::Unknown => 0,
        }
    }

    /// Highest-scoring profile, first in tie-break order on ties.
    pub fn leader(&self) -> (MotorProfile, u32) {
        let mut best = (MotorProfile::Spinner, self.spinner);
        for profile in &MotorProfile::NAMED[1..] {
            let score = self.get(*profile);
            if score > best.1 {
                best = (*profile, score);
            }
        }
        best
    }
}

/// Rule-based motor profile classifier.
#[derive(Debug, Clone, Default)]
pub struct MotorProfileClassifier {
    settings: ClassifierSettings,
}

impl MotorProfileClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    /// Accumulate indicator points for every named profile.
    pub fn score(&self, features: &SwingFeatureVector) -> ProfileScores {
        let bat_speed = features.bat_speed_mph;
        let efficiency = features.speed_efficiency_pct;
        let trigger = features.trigger_to_impact_ms;
        let cast = features.hand_cast_distance_in;
        let zone = features.distance_in_zone_in;

        let above = |value: Option<f32>, threshold: f32| value.is_some_and(|v| v > threshold);
        let below = |value: Option<f32>, threshold: f32| value.is_some_and(|v| v < threshold);
        let within = |value: Option<f32>, low: f32, high: f32| {
            value.is_some_and(|v| (low..=high).contains(&v))
        };

        let mut scores = ProfileScores::default();

        // Spinner
        if above(cast, 8.0) {
            scores.spinner += 30;
        } else if above(cast, 6.0) {
            scores.spinner += 15;
        }
        if within(zone, 12.0, 16.0) {
            scores.spinner += 20;
        }
        if within(efficiency, 75.0, 85.0) {
            scores.spinner += 10;
        }

        // Whipper
        if above(efficiency, 85.0) {
            scores.whipper += 35;
        } else if above(efficiency, 80.0) {
            scores.whipper += 20;
        }
        if below(trigger, 150.0) {
            scores.whipper += 25;
        } else if below(trigger, 160.0) {
            scores.whipper += 15;
        }
        if below(cast, 6.0) {
            scores.whipper += 10;
        }

        // Slingshotter
        if above(zone, 15.0) {
            scores.slingshotter += 30;
        } else if above(zone, 13.0) {
            scores.slingshotter += 15;
        }
        if above(bat_speed, 65.0) {
            scores.slingshotter += 25;
        } else if above(bat_speed, 58.0) {
            scores.slingshotter += 15;
        }
        if above(trigger, 160.0) {
            scores.slingshotter += 10;
        }

        // Titan
        if above(bat_speed, 70.0) && above(efficiency, 80.0) && above(zone, 14.0) {
            scores.titan += 50;
        }
        if above(bat_speed, 75.0) {
            scores.titan += 15;
        }
        if above(efficiency, 85.0) && above(bat_speed, 65.0) {
            scores.titan += 20;
        }

        scores
    }

    /// Classify a swing.
    pub fn classify(&self, features: &SwingFeatureVector) -> MotorProfileResult {
        let scores = self.score(features);
        let (profile, max_score) = scores.leader();
        let confidence = (max_score as f32).round().min(100.0) as u8;

        if confidence < self.settings.min_confidence || max_score < self.settings.min_score {
            tracing::debug!(?scores, "Motor profile below evidence gate");
            return MotorProfileResult::unknown();
        }

        MotorProfileResult {
            profile,
            confidence,
        }
    }
}

/// Classify with the default evidence gate.
pub fn classify(features: &SwingFeatureVector) -> MotorProfileResult {
    MotorProfileClassifier::new().classify(features)
}
