//! Age-group benchmark tables.
//!
//! Bat-speed percentile breakpoints and trigger-to-impact timing windows for
//! each development tier. These are fixed published reference values, not an
//! empirical distribution.

use serde::{Deserialize, Serialize};

use crate::swing::AgeGroup;

/// Bat-speed breakpoints (mph) for one age group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatSpeedBenchmarks {
    pub p10: f32,
    pub p25: f32,
    pub p50: f32,
    pub p75: f32,
    pub p90: f32,
    pub p99: f32,
}

impl BatSpeedBenchmarks {
    pub const fn new(p10: f32, p25: f32, p50: f32, p75: f32, p90: f32, p99: f32) -> Self {
        Self {
            p10,
            p25,
            p50,
            p75,
            p90,
            p99,
        }
    }

    /// Benchmarks for an age group.
    pub fn for_age_group(age_group: AgeGroup) -> Self {
        BAT_SPEED_BENCHMARKS[age_index(age_group)]
    }

    /// Breakpoints paired with the percentile they represent, ascending.
    pub fn breakpoints(&self) -> [(f32, f32); 6] {
        [
            (self.p10, 10.0),
            (self.p25, 25.0),
            (self.p50, 50.0),
            (self.p75, 75.0),
            (self.p90, 90.0),
            (self.p99, 99.0),
        ]
    }
}

/// Trigger-to-impact timing window (ms) for one age group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingWindow {
    /// Ideal trigger-to-impact time
    pub ideal_ms: f32,
    /// Fastest acceptable time
    pub min_ms: f32,
    /// Slowest acceptable time
    pub max_ms: f32,
}

impl TimingWindow {
    pub const fn new(ideal_ms: f32, min_ms: f32, max_ms: f32) -> Self {
        Self {
            ideal_ms,
            min_ms,
            max_ms,
        }
    }

    /// Timing window for an age group.
    pub fn for_age_group(age_group: AgeGroup) -> Self {
        TIMING_WINDOWS[age_index(age_group)]
    }

    /// Whether a measured time falls inside [min, max].
    pub fn contains(&self, ms: f32) -> bool {
        ms >= self.min_ms && ms <= self.max_ms
    }
}

fn age_index(age_group: AgeGroup) -> usize {
    match age_group {
        AgeGroup::U8 => 0,
        AgeGroup::U10 => 1,
        AgeGroup::U12 => 2,
        AgeGroup::U14 => 3,
        AgeGroup::HighSchool => 4,
        AgeGroup::College => 5,
        AgeGroup::Pro => 6,
    }
}

/// Bat-speed percentile breakpoints, indexed youngest first.
pub const BAT_SPEED_BENCHMARKS: [BatSpeedBenchmarks; 7] = [
    BatSpeedBenchmarks::new(30.0, 35.0, 40.0, 45.0, 50.0, 55.0), // 8U
    BatSpeedBenchmarks::new(35.0, 40.0, 45.0, 50.0, 55.0, 60.0), // 10U
    BatSpeedBenchmarks::new(40.0, 45.0, 50.0, 56.0, 61.0, 66.0), // 12U
    BatSpeedBenchmarks::new(48.0, 53.0, 58.0, 63.0, 68.0, 73.0), // 14U
    BatSpeedBenchmarks::new(55.0, 60.0, 65.0, 70.0, 75.0, 80.0), // HS
    BatSpeedBenchmarks::new(62.0, 66.0, 70.0, 75.0, 79.0, 84.0), // College
    BatSpeedBenchmarks::new(66.0, 70.0, 74.0, 78.0, 82.0, 87.0), // Pro
];

/// Trigger-to-impact windows, indexed youngest first.
pub const TIMING_WINDOWS: [TimingWindow; 7] = [
    TimingWindow::new(190.0, 170.0, 220.0), // 8U
    TimingWindow::new(180.0, 160.0, 210.0), // 10U
    TimingWindow::new(170.0, 150.0, 200.0), // 12U
    TimingWindow::new(160.0, 145.0, 185.0), // 14U
    TimingWindow::new(150.0, 135.0, 170.0), // HS
    TimingWindow::new(145.0, 130.0, 165.0), // College
    TimingWindow::new(140.0, 125.0, 160.0), // Pro
];

/// Grade-label thresholds over a 0-100 composite, highest first.
pub const GRADE_THRESHOLDS: [(f32, &str); 7] = [
    (80.0, "Elite"),
    (70.0, "Plus-Plus"),
    (60.0, "Plus"),
    (55.0, "Above Avg"),
    (45.0, "Average"),
    (40.0, "Fringe"),
    (30.0, "Below Avg"),
];

/// Label for composites below every threshold.
pub const GRADE_FLOOR_LABEL: &str = "Needs Work";
