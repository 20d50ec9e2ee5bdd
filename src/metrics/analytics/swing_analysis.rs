//! Per-swing analysis.
//!
//! Runs every scorer over one swing's feature vector and assembles the
//! immutable analysis record handed back to the caller for persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::four_b::{derive_components, ComponentInputs};
use super::insights::{generate_insights, InsightInputs, SwingInsights};
use super::leaks::{detect_leak, Leak};
use super::motor_profile::{MotorProfile, MotorProfileClassifier};
use super::session::{aggregate_with, SessionSummary};
use crate::metrics::attack_angle::{analyze_attack_angle, AttackAngleAnalysis, AttackAngleZone};
use crate::metrics::axis_stability::{classify_axis_stability, AxisStability};
use crate::metrics::benchmarks::BatSpeedBenchmarks;
use crate::metrics::composite::{FourBComponents, FourBScore};
use crate::metrics::efficiency::efficiency_rating;
use crate::metrics::percentile::percentile;
use crate::metrics::tempo::tempo_score;
use crate::storage::config::EngineConfig;
use crate::swing::{AgeGroup, SourceFidelity, SwingCapture, SwingFeatureVector};
use crate::vision::VisionAnalysis;

/// Engine output for one swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CbSwingAnalysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub age_group: AgeGroup,
    pub source_fidelity: SourceFidelity,
    /// Input measurements, echoed
    pub features: SwingFeatureVector,
    pub tempo_score: u8,
    pub efficiency_rating: u8,
    pub motor_profile: MotorProfile,
    pub motor_profile_confidence: u8,
    /// 0 when bat speed was not measured
    pub bat_speed_percentile: f32,
    pub attack_angle_zone: AttackAngleZone,
    pub attack_angle_feedback: String,
    pub axis_stability: Option<AxisStability>,
    /// None when a vision response named no recognisable leak
    pub leak: Option<Leak>,
    pub four_b: FourBScore,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drill_recommendations: Vec<String>,
    pub coaching_notes: Option<String>,
}

impl CbSwingAnalysis {
    /// Measured bat speed, if any.
    pub fn bat_speed(&self) -> Option<f32> {
        self.features.measured_bat_speed()
    }

    /// Weighted 4B composite.
    pub fn composite(&self) -> f32 {
        self.four_b.composite
    }
}

/// Scores sensor and vision swings with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct SwingAnalyzer {
    config: EngineConfig,
    classifier: MotorProfileClassifier,
}

impl SwingAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        let classifier = MotorProfileClassifier::with_settings(config.classifier);
        Self { config, classifier }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze one captured swing.
    pub fn analyze(&self, capture: &SwingCapture) -> CbSwingAnalysis {
        let features = &capture.features;
        let age_group = capture.age_group.unwrap_or(self.config.default_age_group);
        let scored = self.score_features(features, age_group);

        let profile = self.classifier.classify(features);
        let leak = detect_leak(features, scored.axis_stability.as_ref());

        let insights = generate_insights(&InsightInputs {
            bat_speed_percentile: scored.bat_speed_percentile,
            attack_angle: &scored.attack_angle,
            efficiency_rating: scored.efficiency_rating,
            tempo_score: scored.tempo_score,
            motor_profile: profile.profile,
            leak,
        });

        let components = derive_components(&ComponentInputs {
            features,
            tempo_score: scored.tempo_score,
            efficiency_rating: scored.efficiency_rating,
            bat_speed_percentile: scored.bat_speed_percentile,
            attack_angle: &scored.attack_angle,
            axis_stability: scored.axis_stability.as_ref(),
        });
        let four_b = self.score_four_b(components, capture.source_fidelity);

        tracing::debug!(
            profile = %profile.profile,
            confidence = profile.confidence,
            composite = four_b.composite,
            leak = %leak,
            "Analyzed {} swing",
            capture.source_fidelity
        );

        CbSwingAnalysis {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            age_group,
            source_fidelity: capture.source_fidelity,
            features: *features,
            tempo_score: scored.tempo_score,
            efficiency_rating: scored.efficiency_rating,
            motor_profile: profile.profile,
            motor_profile_confidence: profile.confidence,
            bat_speed_percentile: scored.bat_speed_percentile.unwrap_or(0.0),
            attack_angle_zone: scored.attack_angle.zone,
            attack_angle_feedback: scored.attack_angle.feedback,
            axis_stability: scored.axis_stability,
            leak: Some(leak),
            four_b,
            strengths: insights.strengths,
            improvements: insights.improvements,
            drill_recommendations: insights.drills,
            coaching_notes: None,
        }
    }

    /// Analyze a batch of swings; each swing is independent.
    pub fn analyze_batch(&self, captures: &[SwingCapture]) -> Vec<CbSwingAnalysis> {
        captures.iter().map(|c| self.analyze(c)).collect()
    }

    /// Build an analysis from a vision-service response.
    ///
    /// Component scores come from the service and are capped as a 2D
    /// estimate. Timing, efficiency and percentile are scored from whatever
    /// features the service estimated, falling back to neutral defaults.
    pub fn analyze_vision(&self, response: VisionAnalysis, age_group: AgeGroup) -> CbSwingAnalysis {
        let features = response.estimated_features.unwrap_or_default();
        let scored = self.score_features(&features, age_group);

        let motor_profile = response.parsed_motor_profile();
        let motor_profile_confidence = response.profile_confidence();
        let leak = response.parsed_leak();
        let four_b = self.score_four_b(response.components(), SourceFidelity::Vision2d);

        let insights = if response.strengths.is_empty()
            && response.improvements.is_empty()
            && response.drills.is_empty()
        {
            generate_insights(&InsightInputs {
                bat_speed_percentile: scored.bat_speed_percentile,
                attack_angle: &scored.attack_angle,
                efficiency_rating: scored.efficiency_rating,
                tempo_score: scored.tempo_score,
                motor_profile,
                leak: leak.unwrap_or(Leak::CleanTransfer),
            })
        } else {
            let mut drills = dedup(response.drills);
            if let Some(drill) = leak.and_then(|l| l.drill()) {
                if !drills.iter().any(|d| d == drill) {
                    drills.push(drill.to_string());
                }
            }
            SwingInsights {
                strengths: dedup(response.strengths),
                improvements: dedup(response.improvements),
                drills,
            }
        };

        tracing::debug!(
            profile = %motor_profile,
            composite = four_b.composite,
            capped = four_b.capped,
            "Converted vision response"
        );

        CbSwingAnalysis {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            age_group,
            source_fidelity: SourceFidelity::Vision2d,
            features,
            tempo_score: scored.tempo_score,
            efficiency_rating: scored.efficiency_rating,
            motor_profile,
            motor_profile_confidence,
            bat_speed_percentile: scored.bat_speed_percentile.unwrap_or(0.0),
            attack_angle_zone: scored.attack_angle.zone,
            attack_angle_feedback: scored.attack_angle.feedback,
            axis_stability: scored.axis_stability,
            leak,
            four_b,
            strengths: insights.strengths,
            improvements: insights.improvements,
            drill_recommendations: insights.drills,
            coaching_notes: response.coaching_notes,
        }
    }

    /// Summarize a session with the configured waggle floor.
    pub fn summarize(&self, analyses: &[CbSwingAnalysis]) -> SessionSummary {
        aggregate_with(analyses, self.config.session.waggle_floor_mph)
    }

    fn score_features(&self, features: &SwingFeatureVector, age_group: AgeGroup) -> ScoredFeatures {
        let benchmarks = BatSpeedBenchmarks::for_age_group(age_group);

        ScoredFeatures {
            bat_speed_percentile: features
                .measured_bat_speed()
                .map(|speed| percentile(Some(speed), &benchmarks)),
            tempo_score: tempo_score(features.trigger_to_impact_ms, age_group),
            efficiency_rating: efficiency_rating(
                features.speed_efficiency_pct,
                features.attack_angle_deg,
                features.distance_in_zone_in,
                features.hand_cast_distance_in,
            ),
            attack_angle: analyze_attack_angle(features.attack_angle_deg),
            axis_stability: features.cog_velocity_y.map(classify_axis_stability),
        }
    }

    fn score_four_b(&self, components: FourBComponents, fidelity: SourceFidelity) -> FourBScore {
        let settings = &self.config.composite;
        FourBScore::score(components, fidelity, &settings.weights, &settings.vision_caps)
    }
}

/// Independent scorer outputs for one feature vector.
struct ScoredFeatures {
    bat_speed_percentile: Option<f32>,
    tempo_score: u8,
    efficiency_rating: u8,
    attack_angle: AttackAngleAnalysis,
    axis_stability: Option<AxisStability>,
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
