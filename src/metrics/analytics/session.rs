//! Session-level aggregation over per-swing analyses.
//!
//! A summary is always a full recompute over the analyses supplied. Swings
//! below the waggle floor (or with no bat speed) are dropped before any
//! statistic is computed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::leaks::Leak;
use super::motor_profile::MotorProfile;
use super::swing_analysis::CbSwingAnalysis;

/// Default minimum bat speed (mph) for a real swing.
pub const DEFAULT_WAGGLE_FLOOR_MPH: f32 = 25.0;

/// Aggregate statistics for one capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Analyses supplied, including waggles
    pub total_swings: usize,
    /// Analyses that passed the waggle floor
    pub valid_swings: usize,
    pub avg_bat_speed: Option<f32>,
    pub max_bat_speed: Option<f32>,
    pub avg_hand_speed: Option<f32>,
    pub avg_attack_angle: Option<f32>,
    pub avg_trigger_to_impact: Option<f32>,
    pub avg_speed_efficiency: Option<f32>,
    pub avg_bat_speed_percentile: Option<f32>,
    pub avg_tempo_score: Option<f32>,
    pub avg_efficiency_rating: Option<f32>,
    pub avg_composite: Option<f32>,
    pub dominant_motor_profile: MotorProfile,
    pub motor_profile_breakdown: BTreeMap<MotorProfile, usize>,
    pub dominant_leak: Option<Leak>,
    pub leak_breakdown: BTreeMap<Leak, usize>,
    /// 0-100, from bat-speed coefficient of variation
    pub consistency_score: u8,
    /// Union across swings, first-seen order
    pub strengths: Vec<String>,
    /// Union across swings, first-seen order
    pub improvements: Vec<String>,
}

/// Aggregate with the default waggle floor.
pub fn aggregate(analyses: &[CbSwingAnalysis]) -> SessionSummary {
    aggregate_with(analyses, DEFAULT_WAGGLE_FLOOR_MPH)
}

/// Aggregate, treating swings slower than `waggle_floor_mph` as invalid.
pub fn aggregate_with(analyses: &[CbSwingAnalysis], waggle_floor_mph: f32) -> SessionSummary {
    let valid: Vec<&CbSwingAnalysis> = analyses
        .iter()
        .filter(|a| a.bat_speed().is_some_and(|speed| speed >= waggle_floor_mph))
        .collect();

    let bat_speeds: Vec<f32> = valid.iter().filter_map(|a| a.bat_speed()).collect();

    let motor_profile_breakdown = count_by(valid.iter().map(|a| a.motor_profile));
    let leak_breakdown = count_by(valid.iter().filter_map(|a| a.leak));

    let summary = SessionSummary {
        total_swings: analyses.len(),
        valid_swings: valid.len(),
        avg_bat_speed: mean(bat_speeds.iter().copied()),
        max_bat_speed: bat_speeds.iter().copied().reduce(f32::max),
        avg_hand_speed: mean(valid.iter().filter_map(|a| a.features.hand_speed_mph)),
        avg_attack_angle: mean(valid.iter().filter_map(|a| a.features.attack_angle_deg)),
        avg_trigger_to_impact: mean(
            valid
                .iter()
                .filter_map(|a| a.features.trigger_to_impact_ms)
                .filter(|ms| *ms > 0.0),
        ),
        avg_speed_efficiency: mean(valid.iter().filter_map(|a| a.features.speed_efficiency_pct)),
        avg_bat_speed_percentile: mean(valid.iter().map(|a| a.bat_speed_percentile)),
        avg_tempo_score: mean(valid.iter().map(|a| a.tempo_score as f32)),
        avg_efficiency_rating: mean(valid.iter().map(|a| a.efficiency_rating as f32)),
        avg_composite: mean(valid.iter().map(|a| a.composite())),
        dominant_motor_profile: mode(&motor_profile_breakdown, &MotorProfile::ALL)
            .unwrap_or(MotorProfile::Unknown),
        dominant_leak: mode(&leak_breakdown, &Leak::ALL),
        motor_profile_breakdown,
        leak_breakdown,
        consistency_score: consistency_score(&bat_speeds),
        strengths: union(valid.iter().flat_map(|a| a.strengths.iter())),
        improvements: union(valid.iter().flat_map(|a| a.improvements.iter())),
    };

    tracing::info!(
        total = summary.total_swings,
        valid = summary.valid_swings,
        consistency = summary.consistency_score,
        dominant = %summary.dominant_motor_profile,
        "Recomputed session summary"
    );

    summary
}

/// Coefficient of variation (population stddev / mean).
///
/// None for an empty slice or a zero mean.
pub fn coefficient_of_variation(values: &[f32]) -> Option<f32> {
    let mean = mean(values.iter().copied())?;
    if mean == 0.0 {
        return None;
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32;
    Some(variance.sqrt() / mean)
}

/// Consistency from bat-speed spread: `100 - CV * 200`, floored at 0.
///
/// An undefined CV (no swings, zero mean) scores 0. A single swing has
/// CV 0 and scores 100.
pub fn consistency_score(bat_speeds: &[f32]) -> u8 {
    match coefficient_of_variation(bat_speeds) {
        Some(cv) => (100.0 - cv * 200.0).clamp(0.0, 100.0).round() as u8,
        None => 0,
    }
}

fn mean(values: impl Iterator<Item = f32>) -> Option<f32> {
    let (sum, count) = values.fold((0.0f32, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}

fn count_by<K: Ord>(items: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Most frequent key; ties go to the key listed first in `order`.
fn mode<K: Ord + Copy>(counts: &BTreeMap<K, usize>, order: &[K]) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for key in order {
        let count = counts.get(key).copied().unwrap_or(0);
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((*key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn union<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
