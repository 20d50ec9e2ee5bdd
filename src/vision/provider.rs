//! Vision-analysis provider seam.
//!
//! The vision service scores swings from video frames with a language model.
//! Its reasoning cannot be reproduced locally, so the engine only consumes its
//! output through this trait and treats it as a lower-fidelity data source.

use super::types::{VisionAnalysis, VisionError, VisionFrame};
use crate::metrics::analytics::swing_analysis::{CbSwingAnalysis, SwingAnalyzer};
use crate::swing::AgeGroup;

/// External service that scores a swing from video frames.
pub trait VisionAnalysisProvider: Send + Sync {
    /// Score the swing shown in `frames`.
    fn analyze(&self, frames: &[VisionFrame]) -> Result<VisionAnalysis, VisionError>;
}

/// Run a provider over a clip and convert its output into a capped analysis.
pub fn analyze_frames<P: VisionAnalysisProvider + ?Sized>(
    provider: &P,
    analyzer: &SwingAnalyzer,
    frames: &[VisionFrame],
    age_group: AgeGroup,
) -> Result<CbSwingAnalysis, VisionError> {
    if frames.is_empty() {
        return Err(VisionError::NoFrames);
    }

    let response = provider.analyze(frames)?;
    tracing::debug!(frames = frames.len(), "Vision service returned scores");

    Ok(analyzer.analyze_vision(response, age_group))
}
