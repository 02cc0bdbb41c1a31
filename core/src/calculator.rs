//! The period metric calculator. One team, one period, one record.
//!
//! COMPUTATION ORDER (fixed, each step reads only earlier results):
//!   1. Seed the full record from the partial inputs.
//!   2. Effective required agent minutes (LOB share x backlog).
//!   3. Required HC via the selected staffing model.
//!   4. Actual HC via the carry-forward rule, gated by the model's
//!      stored-actual precedence policy.
//!   5. Over/under HC.
//!   6. Actual productive agent minutes.
//!   7. Attrition loss, HC after attrition, ending HC.
//!   8. LOB total pass-through.
//!
//! This function cannot fail. Missing and non-finite inputs degrade to
//! zero outputs through the normalization guard; a misconfigured period
//! reports 0 required and 0 actual rather than raising.

use crate::{
    carry_forward::roll_forward_actual_hc,
    metrics::{TeamPeriodInputs, TeamPeriodicMetrics},
    model::{ModelKind, PeriodCall},
};

pub fn calculate_team_metrics_for_period(
    model: ModelKind,
    inputs: &TeamPeriodInputs,
    call: &PeriodCall,
) -> TeamPeriodicMetrics {
    let strategy = model.model();
    let mut record = TeamPeriodicMetrics::seeded_from(inputs);

    // Team share of the LOB demand minutes, inflated by the team's own
    // backlog. Traceability only; required HC comes from the model.
    let base_team_required_minutes = call.lob_total_base_required_minutes.unwrap_or(0.0)
        * (record.volume_mix_percentage.unwrap_or(0.0) / 100.0);
    let effective_team_required_minutes =
        base_team_required_minutes * (1.0 + record.backlog_percentage.unwrap_or(0.0) / 100.0);
    record.calculated_required_agent_minutes = Some(effective_team_required_minutes);

    let required_hc = strategy.required_hc(&record, call);
    record.required_hc = Some(required_hc);

    let derived_actual = roll_forward_actual_hc(&record, call);
    if !strategy.keeps_stored_actual(record.actual_hc) {
        record.actual_hc = Some(derived_actual);
    }

    // Every derived field below reads the stored actual 0-coalesced, so
    // a model that kept an absent stored value still degrades to 0.
    let current_actual = record.actual_hc.unwrap_or(0.0);
    record.over_under_hc = Some(current_actual - required_hc);

    record.calculated_actual_productive_agent_minutes = Some(if call.standard_work_minutes > 0.0 {
        current_actual
            * call.standard_work_minutes
            * (1.0 - record.in_office_shrinkage_percentage.unwrap_or(0.0) / 100.0)
            * (1.0 - record.out_of_office_shrinkage_percentage.unwrap_or(0.0) / 100.0)
            * (record.occupancy_percentage.unwrap_or(0.0) / 100.0)
    } else {
        0.0
    });

    let attrition_loss = current_actual * (record.attrition_percentage.unwrap_or(0.0) / 100.0);
    record.attrition_loss_hc = Some(attrition_loss);
    let hc_after_attrition = current_actual - attrition_loss;
    record.hc_after_attrition = Some(hc_after_attrition);
    record.ending_hc = Some(
        hc_after_attrition
            + record.new_hire_production.unwrap_or(0.0)
            + record.move_in.unwrap_or(0.0)
            - record.move_out.unwrap_or(0.0),
    );
    record.lob_total_base_req_minutes_for_calc = call.lob_total_base_required_minutes;

    record
}
