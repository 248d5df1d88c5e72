use serde::{Deserialize, Serialize};

use crate::catalog::series::DataPoint;

/// Minimum shift in the averaged 189 score before a series counts as moving.
const TREND_THRESHOLD: f64 = 1.5;

/// Direction of the 189 cutoff over the year. `Up` means the cutoff got
/// harder to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Compares the mean 189 score of the first two months with the last two.
/// Only those four points are read.
pub fn classify(series: &[DataPoint]) -> Trend {
    let n = series.len();
    if n < 4 {
        return Trend::Stable;
    }

    let start_avg = f64::from(series[0].score189 + series[1].score189) / 2.0;
    let end_avg = f64::from(series[n - 2].score189 + series[n - 1].score189) / 2.0;

    if end_avg > start_avg + TREND_THRESHOLD {
        Trend::Up
    } else if end_avg < start_avg - TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    }
}
