//! Swing scoring: benchmarks, individual scorers and the 4B composite.

pub mod analytics;
pub mod attack_angle;
pub mod axis_stability;
pub mod benchmarks;
pub mod composite;
pub mod efficiency;
pub mod percentile;
pub mod tempo;

pub use attack_angle::{analyze_attack_angle, AttackAngleAnalysis, AttackAngleZone};
pub use axis_stability::{classify_axis_stability, AxisStability, AxisStabilityKind};
pub use benchmarks::{BatSpeedBenchmarks, TimingWindow};
pub use composite::{
    composite, grade_label, CompositeWeights, FourBComponents, FourBScore, VisionCaps,
    NEUTRAL_COMPONENT,
};
pub use efficiency::efficiency_rating;
pub use percentile::{percentile, percentile_label};
pub use tempo::{tempo_score, tempo_label};

// Re-export key analytics types for convenience
pub use analytics::{
    aggregate, classify, CbSwingAnalysis, Leak, MotorProfile, MotorProfileResult,
    SessionSummary, SwingAnalyzer,
};
