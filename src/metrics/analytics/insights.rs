//! Strength, improvement and drill prescription rules.

use serde::{Deserialize, Serialize};

use super::leaks::Leak;
use super::motor_profile::MotorProfile;
use crate::metrics::attack_angle::{AttackAngleAnalysis, AttackAngleZone};

/// Area flagged for improvement, keyed to a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Improvement {
    BatSpeed,
    AttackAngleFlat,
    AttackAngleSteep,
    Efficiency,
    Timing,
}

impl Improvement {
    pub fn message(&self) -> &'static str {
        match self {
            Improvement::BatSpeed => "Bat speed is below the age-group average",
            Improvement::AttackAngleFlat => "Attack angle is too flat - work on getting the barrel on plane",
            Improvement::AttackAngleSteep => "Attack angle is too steep - flatten the swing path",
            Improvement::Efficiency => "Energy is leaking between the hands and the barrel",
            Improvement::Timing => "Trigger-to-impact timing is inconsistent",
        }
    }

    pub fn drill(&self) -> &'static str {
        match self {
            Improvement::BatSpeed => "Overload/Underload Bat Training",
            Improvement::AttackAngleFlat => "Low Tee Launch Drill",
            Improvement::AttackAngleSteep => "High Tee Level Path Drill",
            Improvement::Efficiency => "Connection Ball Drill",
            Improvement::Timing => "Rhythm Load Drill",
        }
    }
}

/// Scores the rules evaluate.
#[derive(Debug, Clone)]
pub struct InsightInputs<'a> {
    /// Bat-speed percentile, None when bat speed was not measured
    pub bat_speed_percentile: Option<f32>,
    pub attack_angle: &'a AttackAngleAnalysis,
    pub efficiency_rating: u8,
    pub tempo_score: u8,
    pub motor_profile: MotorProfile,
    pub leak: Leak,
}

/// Generated coaching text for one swing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwingInsights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drills: Vec<String>,
}

/// Evaluate the insight rules. Deterministic for identical inputs.
pub fn generate_insights(inputs: &InsightInputs<'_>) -> SwingInsights {
    let mut strengths = Vec::new();
    let flagged = flagged_improvements(inputs);

    if let Some(pct) = inputs.bat_speed_percentile {
        if pct >= 90.0 {
            strengths.push("Elite bat speed for age group".to_string());
        } else if pct >= 75.0 {
            strengths.push("Above average bat speed for age group".to_string());
        }
    }
    if inputs.efficiency_rating > 85 {
        strengths.push("Efficient energy transfer to the barrel".to_string());
    }
    if inputs.tempo_score > 80 {
        strengths.push("Consistent, well-timed tempo".to_string());
    }

    let mut drills = Vec::new();
    let mut push_drill = |drill: &str| {
        if !drills.iter().any(|d: &String| d == drill) {
            drills.push(drill.to_string());
        }
    };

    for improvement in &flagged {
        push_drill(improvement.drill());
    }
    for drill in profile_drills(inputs) {
        push_drill(drill);
    }
    if let Some(drill) = inputs.leak.drill() {
        push_drill(drill);
    }

    SwingInsights {
        strengths,
        improvements: flagged.iter().map(|i| i.message().to_string()).collect(),
        drills,
    }
}

fn flagged_improvements(inputs: &InsightInputs<'_>) -> Vec<Improvement> {
    let mut flagged = Vec::new();

    if inputs.bat_speed_percentile.is_some_and(|pct| pct < 40.0) {
        flagged.push(Improvement::BatSpeed);
    }
    if inputs.attack_angle.measured {
        match inputs.attack_angle.zone {
            AttackAngleZone::Flat => flagged.push(Improvement::AttackAngleFlat),
            AttackAngleZone::Steep => flagged.push(Improvement::AttackAngleSteep),
            AttackAngleZone::Optimal => {}
        }
    }
    if inputs.efficiency_rating < 60 {
        flagged.push(Improvement::Efficiency);
    }
    if inputs.tempo_score < 50 {
        flagged.push(Improvement::Timing);
    }

    flagged
}

fn profile_drills(inputs: &InsightInputs<'_>) -> Vec<&'static str> {
    let mut drills = Vec::new();
    match inputs.motor_profile {
        MotorProfile::Slingshotter if inputs.tempo_score < 60 => drills.push("Short Toss Timing"),
        MotorProfile::Spinner if inputs.efficiency_rating < 70 => drills.push("Hip Lead Drill"),
        MotorProfile::Whipper if inputs.bat_speed_percentile.is_some_and(|p| p < 50.0) => {
            drills.push("Med Ball Rotational Throws")
        }
        MotorProfile::Titan if inputs.attack_angle.zone == AttackAngleZone::Steep => {
            drills.push("Step-Back Drill")
        }
        _ => {}
    }
    drills
}
