//! Bat-speed percentile interpolation against age-group breakpoints.

use super::benchmarks::BatSpeedBenchmarks;

/// Map a raw measurement to a 0-100 percentile by piecewise linear
/// interpolation between breakpoints.
///
/// Segment widths are not uniform (p90-p99 spans 9 points, p75-p90 spans 15).
/// Values at or above p99 may reach 100; tiny positive values bottom out at 1.
/// Absent or non-positive values return 0.
pub fn percentile(value: Option<f32>, benchmarks: &BatSpeedBenchmarks) -> f32 {
    let value = match value {
        Some(v) if v > 0.0 => v,
        _ => return 0.0,
    };

    if value >= benchmarks.p99 {
        return 99.0 + ((value - benchmarks.p99) / 10.0).min(1.0);
    }

    let points = benchmarks.breakpoints();
    for pair in points.windows(2).rev() {
        let (low_value, low_pct) = pair[0];
        let (high_value, high_pct) = pair[1];
        if value >= low_value {
            let span = high_value - low_value;
            if span <= 0.0 {
                return low_pct;
            }
            let frac = (value - low_value) / span;
            return low_pct + frac * (high_pct - low_pct);
        }
    }

    if benchmarks.p10 <= 0.0 {
        return 1.0;
    }
    ((value / benchmarks.p10) * 10.0).max(1.0)
}

/// Scout-style label for a percentile.
pub fn percentile_label(pct: f32) -> &'static str {
    if pct >= 90.0 {
        "Elite"
    } else if pct >= 75.0 {
        "Above Average"
    } else if pct >= 40.0 {
        "Average"
    } else if pct > 0.0 {
        "Below Average"
    } else {
        "No Data"
    }
}
