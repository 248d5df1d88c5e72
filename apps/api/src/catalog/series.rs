//! Series Generator: twelve synthetic monthly data points per occupation.
//!
//! Scores follow a seeded sinusoid around the base score. Invitation spikes and
//! backlog growth come from a `Draws` source so callers decide whether the
//! noise is live (fresh entropy) or reproducible (seeded / fixed sequence).
//!
//! Score ordering: 189 ≥ 190 ≥ 491 holds after clamping because rounding and
//! clamping are both monotone and the three share the same noise term.

use rand::Rng;
use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const SCORE_FLOOR: i32 = 65;
pub const SCORE_CEILING: i32 = 100;

const OFFSET_190: i32 = 5;
const OFFSET_491: i32 = 15;

/// Inclusive bounds of an invitation spike in a round month.
const INVITATIONS_RANGE: (u32, u32) = (20, 119);
/// Inclusive bounds of the per-month backlog growth rate.
const GROWTH_RANGE: (u32, u32) = (10, 39);

/// One month of synthetic data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub month: &'static str,
    pub score189: i32,
    pub score190: i32,
    pub score491: i32,
    pub invitations: u32,
    pub applications: u32,
}

/// Source of the uniformly distributed integers used for invitations and
/// backlog growth.
pub trait Draws {
    /// Returns an integer in `[low, high]`.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

/// Adapts any `rand` generator into a `Draws` source.
pub struct RngDraws<R>(pub R);

impl<R: Rng> Draws for RngDraws<R> {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

/// Generates Jan..Dec for one occupation.
///
/// Per month the invitation draw (round months only) happens before the
/// growth-rate draw, so a fixed sequence maps onto months predictably.
pub fn generate(
    base_score: i32,
    volatility: i32,
    seed: u32,
    base_volume: i32,
    draws: &mut dyn Draws,
) -> Vec<DataPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let i = i as u32;

            let time_component = f64::from(i + seed % 12) * 0.5;
            let score_noise = time_component.sin() * f64::from(volatility)
                + (f64::from(i) * 0.8).cos() * 1.5;

            let has_round = (i + seed) % 3 == 0;
            let invitations = if has_round {
                draws.draw(INVITATIONS_RANGE.0, INVITATIONS_RANGE.1)
            } else {
                0
            };

            let growth_rate = draws.draw(GROWTH_RANGE.0, GROWTH_RANGE.1);
            let backlog_noise = (f64::from(i) * 0.2).sin() * (f64::from(base_volume) * 0.1);
            let applications = (f64::from(base_volume) + f64::from(i * growth_rate)
                - f64::from(invitations) * 0.5
                + backlog_noise)
                .floor()
                .max(0.0) as u32;

            DataPoint {
                month: *month,
                score189: score(base_score, score_noise),
                score190: score(base_score - OFFSET_190, score_noise),
                score491: score(base_score - OFFSET_491, score_noise),
                invitations,
                applications,
            }
        })
        .collect()
}

fn score(base: i32, noise: f64) -> i32 {
    ((f64::from(base) + noise).round() as i32).clamp(SCORE_FLOOR, SCORE_CEILING)
}
