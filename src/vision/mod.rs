//! External vision-analysis service interface.
//!
//! Provides:
//! - The provider trait the capture pipeline implements
//! - The service's JSON score blob and label parsing
//! - Conversion into a capped per-swing analysis

pub mod provider;
pub mod types;

pub use provider::{analyze_frames, VisionAnalysisProvider};
pub use types::{VisionAnalysis, VisionError, VisionFrame};
