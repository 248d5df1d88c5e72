//! Chart-ready projections of an occupation's series: the three-line score
//! trend chart and the dual-axis invitations/backlog chart.

use serde::Serialize;

use crate::catalog::builder::Occupation;
use crate::catalog::series::DataPoint;

/// Fixed y-axis range of the score chart; sits just below the score floor.
const SCORE_AXIS: [i32; 2] = [60, 100];

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub month: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    /// DataPoint field the series is read from.
    pub key: &'static str,
    pub label: &'static str,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreTrendChart {
    pub title: &'static str,
    pub y_domain: [i32; 2],
    pub lines: Vec<ChartSeries>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub label: &'static str,
    pub series: ChartSeries,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolumeChart {
    pub title: &'static str,
    /// Backlog, drawn as an area.
    pub left: Axis,
    /// Invitations, drawn as bars.
    pub right: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupationCharts {
    pub trend: ScoreTrendChart,
    pub volume: VolumeChart,
}

pub fn charts_for(occupation: &Occupation) -> OccupationCharts {
    OccupationCharts {
        trend: score_trend(&occupation.data),
        volume: volume(&occupation.data),
    }
}

pub fn score_trend(data: &[DataPoint]) -> ScoreTrendChart {
    ScoreTrendChart {
        title: "Minimum Invitation Score (Last 12 Months)",
        y_domain: SCORE_AXIS,
        lines: vec![
            series(data, "score189", "189 Visa", |p| i64::from(p.score189)),
            series(data, "score190", "190 Visa (NSW/VIC)", |p| i64::from(p.score190)),
            series(data, "score491", "491 Regional", |p| i64::from(p.score491)),
        ],
    }
}

pub fn volume(data: &[DataPoint]) -> VolumeChart {
    VolumeChart {
        title: "Supply & Demand: Invitations vs Applications",
        left: Axis {
            label: "Active Applications",
            series: series(data, "applications", "Backlog (Applications)", |p| {
                i64::from(p.applications)
            }),
        },
        right: Axis {
            label: "Invitations Issued",
            series: series(data, "invitations", "Invitations Issued", |p| {
                i64::from(p.invitations)
            }),
        },
    }
}

fn series(
    data: &[DataPoint],
    key: &'static str,
    label: &'static str,
    value: impl Fn(&DataPoint) -> i64,
) -> ChartSeries {
    ChartSeries {
        key,
        label,
        points: data
            .iter()
            .map(|p| ChartPoint {
                month: p.month,
                value: value(p),
            })
            .collect(),
    }
}
