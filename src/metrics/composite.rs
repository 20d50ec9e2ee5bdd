//! 4B composite scoring.
//!
//! Body and Bat carry 30% each, Brain and Ball 20% each. Brain and Ball
//! estimates from 2D vision are capped before weighting; the cap is applied by
//! whichever stage knows the data source, never by the raw scorers.

use serde::{Deserialize, Serialize};

use super::benchmarks::{GRADE_FLOOR_LABEL, GRADE_THRESHOLDS};
use crate::swing::SourceFidelity;

/// Component score used when a domain has no inputs.
pub const NEUTRAL_COMPONENT: f32 = 50.0;

/// Weights for the four components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub body: f32,
    pub brain: f32,
    pub bat: f32,
    pub ball: f32,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            body: 0.30,
            brain: 0.20,
            bat: 0.30,
            ball: 0.20,
        }
    }
}

/// Hard caps for components that a 2D estimate cannot support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionCaps {
    pub brain: f32,
    pub ball: f32,
}

impl Default for VisionCaps {
    fn default() -> Self {
        Self {
            brain: 55.0,
            ball: 50.0,
        }
    }
}

/// The four component scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourBComponents {
    pub body: f32,
    pub brain: f32,
    pub bat: f32,
    pub ball: f32,
}

impl FourBComponents {
    pub fn new(body: f32, brain: f32, bat: f32, ball: f32) -> Self {
        Self {
            body: body.clamp(0.0, 100.0),
            brain: brain.clamp(0.0, 100.0),
            bat: bat.clamp(0.0, 100.0),
            ball: ball.clamp(0.0, 100.0),
        }
    }

    /// Apply provenance caps for the given source.
    pub fn capped_for(&self, fidelity: SourceFidelity, caps: &VisionCaps) -> Self {
        if !fidelity.is_estimate() {
            return *self;
        }
        Self {
            brain: self.brain.min(caps.brain),
            ball: self.ball.min(caps.ball),
            ..*self
        }
    }

    /// Weighted composite of the components as they stand.
    pub fn composite(&self, weights: &CompositeWeights) -> f32 {
        composite_weighted(self.body, self.brain, self.bat, self.ball, weights)
    }
}

/// Final 4B scorecard for one swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBScore {
    /// Components after provenance caps
    pub components: FourBComponents,
    /// Whether caps were applied
    pub capped: bool,
    /// Weighted composite (0-100)
    pub composite: f32,
    /// Grade label for the composite
    pub grade: String,
}

impl FourBScore {
    /// Cap, weight and grade a set of components.
    pub fn score(
        components: FourBComponents,
        fidelity: SourceFidelity,
        weights: &CompositeWeights,
        caps: &VisionCaps,
    ) -> Self {
        let capped = components.capped_for(fidelity, caps);
        let composite = capped.composite(weights);

        Self {
            capped: capped != components,
            components: capped,
            composite,
            grade: grade_label(composite).to_string(),
        }
    }
}

/// Composite with the standard 0.30/0.20/0.30/0.20 weights.
pub fn composite(body: f32, brain: f32, bat: f32, ball: f32) -> f32 {
    composite_weighted(body, brain, bat, ball, &CompositeWeights::default())
}

/// Composite with explicit weights.
pub fn composite_weighted(
    body: f32,
    brain: f32,
    bat: f32,
    ball: f32,
    weights: &CompositeWeights,
) -> f32 {
    body * weights.body + brain * weights.brain + bat * weights.bat + ball * weights.ball
}

/// Grade label for a composite score.
pub fn grade_label(composite: f32) -> &'static str {
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| composite >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(GRADE_FLOOR_LABEL)
}
