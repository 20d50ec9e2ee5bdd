//! Swing analytics built on the individual scorers.
//!
//! This module provides:
//! - Motor profile classification
//! - Energy leak detection
//! - Strength / improvement / drill prescription
//! - 4B component derivation
//! - Per-swing analysis records
//! - Session aggregation

pub mod four_b;
pub mod insights;
pub mod leaks;
pub mod motor_profile;
pub mod session;
pub mod swing_analysis;

// Re-exports for convenience
pub use four_b::{derive_components, kinematic_sequence_score, ComponentInputs};
pub use insights::{generate_insights, Improvement, InsightInputs, SwingInsights};
pub use leaks::{detect_leak, Leak};
pub use motor_profile::{
    classify, ClassifierSettings, MotorProfile, MotorProfileClassifier, MotorProfileResult,
    ProfileScores,
};
pub use session::{
    aggregate, aggregate_with, coefficient_of_variation, consistency_score, SessionSummary,
    DEFAULT_WAGGLE_FLOOR_MPH,
};
pub use swing_analysis::{CbSwingAnalysis, SwingAnalyzer};
