//! CPH staffing model: cost-per-handle oriented, used for vendor-billed
//! contact work. `aht` is in seconds under this model.

use crate::{
    metrics::{nan_if_missing, normalized_hc, TeamPeriodicMetrics},
    model::{PeriodCall, StaffingModel},
};

pub struct CphModel;

impl StaffingModel for CphModel {
    fn name(&self) -> &'static str {
        "cph"
    }

    /// Volume inflated by backlog and scaled to the team's mix, over the
    /// productive minutes one head yields at the given AHT.
    ///
    /// The divisor literal 40 is this model's fixed weekly-hours
    /// convention, not the period's standard work minutes. A missing
    /// operand poisons the quotient and the guard collapses it to 0.
    fn required_hc(&self, record: &TeamPeriodicMetrics, call: &PeriodCall) -> f64 {
        let backlog = nan_if_missing(record.backlog_percentage);
        let mix = nan_if_missing(record.volume_mix_percentage);
        let in_office = nan_if_missing(record.in_office_shrinkage_percentage);
        let out_of_office = nan_if_missing(record.out_of_office_shrinkage_percentage);
        let occupancy = nan_if_missing(record.occupancy_percentage);
        let aht = nan_if_missing(record.aht);

        let per_hc = (call.volume * (1.0 + backlog / 100.0) * (mix / 100.0))
            / (40.0
                * (1.0 - in_office / 100.0)
                * (1.0 - out_of_office / 100.0)
                * (occupancy / 100.0)
                * aht);

        normalized_hc(per_hc)
    }

    /// A stored positive actual wins; anything else is overwritten by
    /// the derived roll-forward value.
    fn keeps_stored_actual(&self, stored: Option<f64>) -> bool {
        matches!(stored, Some(v) if v > 0.0)
    }
}
