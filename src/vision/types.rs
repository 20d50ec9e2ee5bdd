//! Vision-service payload and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::analytics::leaks::Leak;
use crate::metrics::analytics::motor_profile::MotorProfile;
use crate::metrics::composite::{FourBComponents, NEUTRAL_COMPONENT};
use crate::swing::SwingFeatureVector;

/// Error types for vision-service operations.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The service failed or refused the request
    #[error("Vision service error: {0}")]
    ServiceError(String),

    /// Nothing to analyze
    #[error("No frames supplied")]
    NoFrames,

    /// The service response could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VisionError {
    fn from(err: serde_json::Error) -> Self {
        VisionError::SerializationError(err.to_string())
    }
}

/// One extracted video frame handed to a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionFrame {
    /// Position in the clip
    pub index: u32,
    /// Milliseconds from clip start
    pub timestamp_ms: u32,
    /// Encoded image (e.g. JPEG)
    #[serde(skip)]
    pub image: Vec<u8>,
}

/// Score blob returned by the vision service.
///
/// Labels are kept as strings; the service vocabulary drifts and unknown
/// labels must not reject an otherwise usable response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisionAnalysis {
    /// Component scores; None when the service omitted one
    pub body_score: Option<f32>,
    pub brain_score: Option<f32>,
    pub bat_score: Option<f32>,
    pub ball_score: Option<f32>,
    /// Leak label, e.g. "CAST"
    pub leak: Option<String>,
    /// Profile label, e.g. "WHIPPER"
    pub motor_profile: Option<String>,
    /// 0-100 if the service reports one
    pub motor_profile_confidence: Option<f32>,
    /// Free-text coaching narrative
    pub coaching_notes: Option<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drills: Vec<String>,
    /// Measurements the service estimated from the frames
    pub estimated_features: Option<SwingFeatureVector>,
}

impl VisionAnalysis {
    /// Decode a service response body.
    pub fn from_json(json: &str) -> Result<Self, VisionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Component scores, clamped to 0-100, with omitted scores neutral.
    /// Caps are not applied here.
    pub fn components(&self) -> FourBComponents {
        let score = |value: Option<f32>| value.unwrap_or(NEUTRAL_COMPONENT);
        FourBComponents::new(
            score(self.body_score),
            score(self.brain_score),
            score(self.bat_score),
            score(self.ball_score),
        )
    }

    /// Parsed leak label, None when absent or outside the vocabulary.
    pub fn parsed_leak(&self) -> Option<Leak> {
        let label = self.leak.as_deref()?;
        let leak = Leak::from_label(label);
        if leak.is_none() {
            tracing::warn!("Discarding unrecognised leak label from vision service: {}", label);
        }
        leak
    }

    /// Parsed profile label, Unknown when absent or unrecognised.
    pub fn parsed_motor_profile(&self) -> MotorProfile {
        match self.motor_profile.as_deref() {
            Some(label) => MotorProfile::from_label(label).unwrap_or_else(|| {
                tracing::warn!("Unrecognised motor profile from vision service: {}", label);
                MotorProfile::Unknown
            }),
            None => MotorProfile::Unknown,
        }
    }

    /// Reported confidence clamped to 0-100; 0 when the profile is Unknown.
    pub fn profile_confidence(&self) -> u8 {
        if self.parsed_motor_profile() == MotorProfile::Unknown {
            return 0;
        }
        self.motor_profile_confidence
            .map(|c| c.clamp(0.0, 100.0).round() as u8)
            .unwrap_or(0)
    }
}
