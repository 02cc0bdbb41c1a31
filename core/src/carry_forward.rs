//! Actual-headcount carry-forward rule.
//!
//! Three branches, evaluated in order:
//!   1. An explicit positive per-period override is used verbatim.
//!   2. Internal teams roll the prior ending headcount forward through
//!      attrition, then add new-hire production and both movement
//!      fields. `move_out` is ADDED here and subtracted only in the
//!      ending-HC step; the asymmetry is the shipped behavior and must
//!      not be corrected silently.
//!   3. BPO teams roll the prior ending headcount forward without the
//!      attrition factor; vendor staffing replenishes itself.
//!
//! A `last_hc` of 0 means no prior period exists; with no override that
//! leaves nothing to roll and the result is 0.

use crate::{
    metrics::{nan_if_missing, normalized_hc, TeamPeriodicMetrics},
    model::PeriodCall,
};

/// Derive the period's actual headcount. The result is already
/// normalized; whether it replaces the record's stored `actual_hc` is
/// the model's precedence decision, not taken here.
pub fn roll_forward_actual_hc(record: &TeamPeriodicMetrics, call: &PeriodCall) -> f64 {
    let derived = if call.actual_hc > 0.0 {
        call.actual_hc
    } else if call.last_hc != 0.0 && !call.is_bpo {
        let attrition = nan_if_missing(record.attrition_percentage);
        call.last_hc * (1.0 - attrition / 100.0)
            + (nan_if_missing(record.new_hire_production)
                + nan_if_missing(record.move_in)
                + nan_if_missing(record.move_out))
    } else if call.last_hc != 0.0 && call.is_bpo {
        call.last_hc
            + nan_if_missing(record.move_in)
            + nan_if_missing(record.move_out)
            + nan_if_missing(record.new_hire_production)
    } else {
        0.0
    };

    normalized_hc(derived)
}
