//! Rollups of team-level results into LOB and business-unit lines.
//!
//! RULES:
//!   - Rollups only ever sum already-calculated records; they never
//!     rerun a staffing formula.
//!   - Missing team outputs count as 0 in a sum, but the over/under of
//!     a rollup is recomputed from its own sums, not summed from the
//!     teams, so the identity over_under = actual - required holds at
//!     every level.
//!   - Base required minutes exist at LOB level only; business-unit
//!     rollups carry None there.

use crate::{config::LobPlan, metrics::TeamPeriodicMetrics};
use serde::{Deserialize, Serialize};

/// One aggregated period line for a LOB or business unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPeriodicMetrics {
    pub required_hc: f64,
    pub actual_hc: f64,
    pub over_under_hc: f64,
    pub lob_total_base_required_minutes: Option<f64>,
}

/// Resolve the LOB's base-required-minutes series for the whole horizon.
///
/// Per period, in order of precedence:
///   1. a direct base-required-minutes entry, when present;
///   2. effective volume x average AHT, when both are present;
///   3. None.
pub fn lob_base_required_minutes(lob: &LobPlan, num_periods: usize) -> Vec<Option<f64>> {
    (0..num_periods)
        .map(|t| {
            if let Some(direct) = crate::config::series_value(&lob.base_required_minutes, t) {
                return Some(direct);
            }
            match (lob.effective_volume(t), crate::config::series_value(&lob.average_aht, t)) {
                (Some(volume), Some(aht)) => Some(volume * aht),
                _ => None,
            }
        })
        .collect()
}

/// Sum team records into one LOB line per period. `base_minutes` is the
/// LOB's resolved series and is attached as-is.
pub fn rollup_teams(
    teams: &[Vec<TeamPeriodicMetrics>],
    base_minutes: &[Option<f64>],
) -> Vec<AggregatedPeriodicMetrics> {
    (0..base_minutes.len())
        .map(|t| {
            let required: f64 = teams
                .iter()
                .filter_map(|periods| periods.get(t))
                .map(|m| m.required_hc.unwrap_or(0.0))
                .sum();
            let actual: f64 = teams
                .iter()
                .filter_map(|periods| periods.get(t))
                .map(|m| m.actual_hc.unwrap_or(0.0))
                .sum();
            AggregatedPeriodicMetrics {
                required_hc: required,
                actual_hc: actual,
                over_under_hc: actual - required,
                lob_total_base_required_minutes: base_minutes[t],
            }
        })
        .collect()
}

/// Sum LOB rollups into one business-unit line per period.
pub fn rollup_lobs(lobs: &[Vec<AggregatedPeriodicMetrics>], num_periods: usize) -> Vec<AggregatedPeriodicMetrics> {
    (0..num_periods)
        .map(|t| {
            let required: f64 = lobs
                .iter()
                .filter_map(|periods| periods.get(t))
                .map(|m| m.required_hc)
                .sum();
            let actual: f64 = lobs
                .iter()
                .filter_map(|periods| periods.get(t))
                .map(|m| m.actual_hc)
                .sum();
            AggregatedPeriodicMetrics {
                required_hc: required,
                actual_hc: actual,
                over_under_hc: actual - required,
                lob_total_base_required_minutes: None,
            }
        })
        .collect()
}
