//! The per-period metric record shared by every staffing model.
//!
//! RULES:
//!   - Every numeric field is Option<f64>; None is the explicit null
//!     default, never a silent zero.
//!   - Formula sites read fields under one of two conventions and the
//!     choice is fixed per field per formula: `.unwrap_or(0.0)` where a
//!     missing value legitimately means "none", or [`nan_if_missing`]
//!     where a missing value must poison the result and collapse to 0
//!     through [`normalized_hc`].
//!   - Records are constructed fresh per period and never mutated after
//!     the calculator returns them.

use serde::{Deserialize, Serialize};

/// Planner-supplied assumptions for one team in one period. Any subset
/// of fields may be present; absent fields stay null through seeding.
///
/// Percentage fields are on the 0-100 scale. `aht` is in seconds under
/// the CPH model and minutes under the Volume-Backlog model; the unit
/// belongs to the model choice and is never converted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamPeriodInputs {
    #[serde(default)]
    pub aht: Option<f64>,
    #[serde(default)]
    pub in_office_shrinkage_percentage: Option<f64>,
    #[serde(default)]
    pub out_of_office_shrinkage_percentage: Option<f64>,
    #[serde(default)]
    pub occupancy_percentage: Option<f64>,
    #[serde(default)]
    pub backlog_percentage: Option<f64>,
    #[serde(default)]
    pub attrition_percentage: Option<f64>,
    #[serde(default)]
    pub volume_mix_percentage: Option<f64>,
    /// Stored actual/starting headcount. Whether a derived roll-forward
    /// value replaces it depends on the model's precedence policy.
    #[serde(default)]
    pub actual_hc: Option<f64>,
    #[serde(default)]
    pub move_in: Option<f64>,
    #[serde(default)]
    pub move_out: Option<f64>,
    /// New hires starting in a training batch this period. Carried for
    /// planning visibility; no formula consumes it in-period.
    #[serde(default)]
    pub new_hire_batch: Option<f64>,
    /// New hires entering production this period.
    #[serde(default)]
    pub new_hire_production: Option<f64>,
    /// Informational share of the LOB forecast; not read by formulas.
    #[serde(default)]
    pub lob_volume_forecast: Option<f64>,
}

/// One team's fully populated metrics for one period: the seeded inputs
/// plus every derived output written by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamPeriodicMetrics {
    pub aht: Option<f64>,
    pub in_office_shrinkage_percentage: Option<f64>,
    pub out_of_office_shrinkage_percentage: Option<f64>,
    pub occupancy_percentage: Option<f64>,
    pub backlog_percentage: Option<f64>,
    pub attrition_percentage: Option<f64>,
    pub volume_mix_percentage: Option<f64>,
    pub actual_hc: Option<f64>,
    pub move_in: Option<f64>,
    pub move_out: Option<f64>,
    pub new_hire_batch: Option<f64>,
    pub new_hire_production: Option<f64>,
    pub lob_volume_forecast: Option<f64>,

    /// Heads needed for the period's workload under the selected model.
    /// Always Some and non-negative after calculation.
    pub required_hc: Option<f64>,
    /// Team share of LOB demand minutes inflated by backlog. Traceability
    /// figure; does not feed `required_hc`.
    pub calculated_required_agent_minutes: Option<f64>,
    /// Actual minus required. Positive = overstaffed.
    pub over_under_hc: Option<f64>,
    pub calculated_actual_productive_agent_minutes: Option<f64>,
    pub attrition_loss_hc: Option<f64>,
    pub hc_after_attrition: Option<f64>,
    /// Headcount at period close. The sole value threaded into the next
    /// period's calculation.
    pub ending_hc: Option<f64>,
    /// Pass-through of the LOB total used for this call, None included.
    pub lob_total_base_req_minutes_for_calc: Option<f64>,
}

impl TeamPeriodicMetrics {
    /// Seed a full record from partial inputs: every input field takes
    /// the caller's value or stays None, every output starts None. Each
    /// field is named here on purpose so a new field cannot sneak past
    /// the defaulting step.
    pub fn seeded_from(inputs: &TeamPeriodInputs) -> Self {
        Self {
            aht: inputs.aht,
            in_office_shrinkage_percentage: inputs.in_office_shrinkage_percentage,
            out_of_office_shrinkage_percentage: inputs.out_of_office_shrinkage_percentage,
            occupancy_percentage: inputs.occupancy_percentage,
            backlog_percentage: inputs.backlog_percentage,
            attrition_percentage: inputs.attrition_percentage,
            volume_mix_percentage: inputs.volume_mix_percentage,
            actual_hc: inputs.actual_hc,
            move_in: inputs.move_in,
            move_out: inputs.move_out,
            new_hire_batch: inputs.new_hire_batch,
            new_hire_production: inputs.new_hire_production,
            lob_volume_forecast: inputs.lob_volume_forecast,
            required_hc: None,
            calculated_required_agent_minutes: None,
            over_under_hc: None,
            calculated_actual_productive_agent_minutes: None,
            attrition_loss_hc: None,
            hc_after_attrition: None,
            ending_hc: None,
            lob_total_base_req_minutes_for_calc: None,
        }
    }
}

/// Headcount normalization guard: magnitude of the value when it is
/// finite and non-zero, else 0. Absorbs NaN and Infinity alike, so a
/// zero denominator or a poisoned operand degrades to "0 required"
/// instead of propagating.
pub fn normalized_hc(value: f64) -> f64 {
    if value.is_finite() && value.abs() > 0.0 {
        value.abs()
    } else {
        0.0
    }
}

/// Strict read for formula operands where a missing input must not
/// silently become zero: None turns into NaN, flows through the
/// formula, and is absorbed by [`normalized_hc`].
pub(crate) fn nan_if_missing(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}
