//! Fixed-HC staffing model: shrinkage-adjusted share of a metric-level
//! requirement supplied from outside the volume formulas. The one model
//! that consumes the `metric_required_hc` call input.

use crate::{
    metrics::{nan_if_missing, normalized_hc, TeamPeriodicMetrics},
    model::{PeriodCall, StaffingModel},
};

pub struct FixedHcModel;

impl StaffingModel for FixedHcModel {
    fn name(&self) -> &'static str {
        "fixed_hc"
    }

    /// The metric-level requirement grossed up for both shrinkage
    /// factors, scaled to the team's mix. A plan that supplies no
    /// metric requirement gets 0 required, consistent with the shared
    /// cannot-compute fallback.
    fn required_hc(&self, record: &TeamPeriodicMetrics, call: &PeriodCall) -> f64 {
        let in_office = nan_if_missing(record.in_office_shrinkage_percentage);
        let out_of_office = nan_if_missing(record.out_of_office_shrinkage_percentage);
        let mix = nan_if_missing(record.volume_mix_percentage);

        let per_hc = call.metric_required_hc / (1.0 - in_office / 100.0)
            / (1.0 - out_of_office / 100.0)
            * (mix / 100.0);

        normalized_hc(per_hc)
    }

    /// Same precedence as the CPH model: a stored positive actual wins.
    fn keeps_stored_actual(&self, stored: Option<f64>) -> bool {
        matches!(stored, Some(v) if v > 0.0)
    }
}
