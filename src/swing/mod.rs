//! Swing capture records consumed by the scoring engine.

pub mod types;

pub use types::{AgeGroup, SourceFidelity, SwingCapture, SwingFeatureVector};
