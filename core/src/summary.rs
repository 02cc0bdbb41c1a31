//! Headline statistics over a LOB's required-HC series.
//!
//! Summaries are built from the periods that carry workload. A period
//! whose effective volume is zero or missing contributes no row, so an
//! unstarted tail of the horizon does not drag the averages down.

use serde::{Deserialize, Serialize};

/// Where a period's volume came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeKind {
    Actual,
    Forecasted,
}

/// One summarizable period: its label, the volume the formulas saw, and
/// the LOB's aggregated required HC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodHcResult {
    pub period: String,
    pub volume: f64,
    pub required_hc: f64,
    pub kind: VolumeKind,
}

/// An extreme of the required-HC series and the period it occurred in.
/// Ties keep the earliest period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStat {
    pub value: f64,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of required HC, rounded to a whole head.
    pub total_required_hc: f64,
    /// Mean required HC, rounded to one decimal.
    pub avg_required_hc: f64,
    pub min_required: PeriodStat,
    pub max_required: PeriodStat,
    /// Mean over periods driven by uploaded actual volume, one decimal.
    pub actual_avg_required_hc: f64,
    /// Mean over forecast-driven periods, one decimal.
    pub forecasted_avg_required_hc: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean1(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        round1(sum / count as f64)
    }
}

/// Collapse a row set into its headline statistics. An empty set yields
/// all-zero stats with empty period labels.
pub fn summarize(rows: &[PeriodHcResult]) -> SummaryStats {
    let Some(first) = rows.first() else {
        let empty = PeriodStat { value: 0.0, period: String::new() };
        return SummaryStats {
            total_required_hc: 0.0,
            avg_required_hc: 0.0,
            min_required: empty.clone(),
            max_required: empty,
            actual_avg_required_hc: 0.0,
            forecasted_avg_required_hc: 0.0,
        };
    };

    let total: f64 = rows.iter().map(|r| r.required_hc).sum();

    let mut min = PeriodStat { value: first.required_hc, period: first.period.clone() };
    let mut max = PeriodStat { value: first.required_hc, period: first.period.clone() };
    for row in &rows[1..] {
        if row.required_hc < min.value {
            min = PeriodStat { value: row.required_hc, period: row.period.clone() };
        }
        if row.required_hc > max.value {
            max = PeriodStat { value: row.required_hc, period: row.period.clone() };
        }
    }

    SummaryStats {
        total_required_hc: total.round(),
        avg_required_hc: round1(total / rows.len() as f64),
        min_required: min,
        max_required: max,
        actual_avg_required_hc: mean1(
            rows.iter().filter(|r| r.kind == VolumeKind::Actual).map(|r| r.required_hc),
        ),
        forecasted_avg_required_hc: mean1(
            rows.iter().filter(|r| r.kind == VolumeKind::Forecasted).map(|r| r.required_hc),
        ),
    }
}
