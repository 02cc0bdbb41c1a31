//! Volume-Backlog staffing model: internal planning convention driven
//! by volume, mix, and backlog carry-over. `aht` is in minutes under
//! this model.

use crate::{
    metrics::{nan_if_missing, normalized_hc, TeamPeriodicMetrics},
    model::{PeriodCall, StaffingModel},
};

pub struct VolumeBacklogModel;

impl StaffingModel for VolumeBacklogModel {
    fn name(&self) -> &'static str {
        "volume_backlog"
    }

    /// Work minutes for the team's volume share, over productive hours,
    /// inflated by backlog and divided by this model's fixed 40-hour
    /// week. The 60 and 40 literals are part of the model's contract.
    fn required_hc(&self, record: &TeamPeriodicMetrics, call: &PeriodCall) -> f64 {
        let mix = nan_if_missing(record.volume_mix_percentage);
        let aht = nan_if_missing(record.aht);
        let occupancy = nan_if_missing(record.occupancy_percentage);
        let in_office = nan_if_missing(record.in_office_shrinkage_percentage);
        let out_of_office = nan_if_missing(record.out_of_office_shrinkage_percentage);
        let backlog = nan_if_missing(record.backlog_percentage);

        let per_hc = (call.volume * (mix / 100.0) * aht)
            / (60.0
                * (occupancy / 100.0)
                * (1.0 - in_office / 100.0)
                * (1.0 - out_of_office / 100.0))
            * (1.0 + backlog / 100.0)
            / 40.0;

        normalized_hc(per_hc)
    }

    /// Only a stored value of exactly 0 is overwritten by the derived
    /// roll-forward. An absent stored actual stays absent and reads as
    /// 0 downstream; a negative one is kept as written.
    fn keeps_stored_actual(&self, stored: Option<f64>) -> bool {
        !matches!(stored, Some(v) if v == 0.0)
    }
}
