//! SwingMetrics - Swing Metrics Derivation & Classification Engine
//!
//! Converts raw baseball-swing measurements from sensors or a 2D vision
//! estimate into percentile ranks, tempo and efficiency ratings, motor-profile
//! classification, energy-leak diagnosis, drill prescriptions, a 4B
//! (Body/Brain/Bat/Ball) composite and session-level summaries.
//!
//! The scoring engine is pure and synchronous; persistence and the vision
//! service sit behind traits.

pub mod metrics;
pub mod storage;
pub mod swing;
pub mod vision;

// Re-export commonly used types
pub use metrics::analytics::{CbSwingAnalysis, MotorProfile, SessionSummary, SwingAnalyzer};
pub use storage::config::EngineConfig;
pub use swing::{AgeGroup, SourceFidelity, SwingCapture, SwingFeatureVector};
pub use vision::{VisionAnalysis, VisionAnalysisProvider};
