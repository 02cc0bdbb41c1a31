//! Staffing model trait and selection.
//!
//! RULE: Every staffing model implements StaffingModel. The calculator
//! asks the selected model for required headcount and for its stored
//! actual-HC precedence policy; everything else in the period record is
//! computed identically across models.

use crate::{
    error::{PlanError, PlanResult},
    metrics::TeamPeriodicMetrics,
};
use serde::{Deserialize, Serialize};

/// Call-scoped inputs of one period calculation. These travel alongside
/// the metric record but are never stored on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodCall {
    /// Total base required minutes across all teams sharing the LOB,
    /// computed by the aggregation pass before any team runs.
    pub lob_total_base_required_minutes: Option<f64>,
    /// Paid minutes per head for the period.
    pub standard_work_minutes: f64,
    /// Period volume assigned to this team's model.
    pub volume: f64,
    /// Metric-level required-HC hint. Only the fixed-HC model reads it;
    /// the CPH and Volume-Backlog formulas accept and ignore it.
    pub metric_required_hc: f64,
    /// Explicit override of the period's actual headcount; values > 0
    /// win over any roll-forward.
    pub actual_hc: f64,
    /// Ending headcount rolled from the previous period; 0 means there
    /// is no prior period.
    pub last_hc: f64,
    /// Outsourced-team regime flag. BPO teams roll headcount forward
    /// without the attrition factor.
    pub is_bpo: bool,
}

/// The contract every staffing model must fulfill.
pub trait StaffingModel: Send + Sync {
    /// Unique stable name for this model.
    fn name(&self) -> &'static str;

    /// Required headcount for one period. Must return a finite,
    /// non-negative number; non-computable inputs collapse to 0.
    fn required_hc(&self, record: &TeamPeriodicMetrics, call: &PeriodCall) -> f64;

    /// Whether the record's stored `actual_hc` survives against the
    /// derived roll-forward value. The two historical conventions
    /// differ on negative and absent stored values and both are kept.
    fn keeps_stored_actual(&self, stored: Option<f64>) -> bool;
}

/// Configuration-level model selector. The model is a per-LOB
/// configuration choice, never inferred from the data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Cph,
    VolumeBacklog,
    FixedHc,
}

impl ModelKind {
    pub fn model(&self) -> &'static dyn StaffingModel {
        match self {
            ModelKind::Cph => &crate::cph_model::CphModel,
            ModelKind::VolumeBacklog => &crate::volume_backlog_model::VolumeBacklogModel,
            ModelKind::FixedHc => &crate::fixed_hc_model::FixedHcModel,
        }
    }

    pub fn name(&self) -> &'static str {
        self.model().name()
    }

    /// Parse a CLI/config spelling into a model kind.
    pub fn parse(name: &str) -> PlanResult<ModelKind> {
        match name {
            "cph" => Ok(ModelKind::Cph),
            "volume_backlog" => Ok(ModelKind::VolumeBacklog),
            "fixed_hc" => Ok(ModelKind::FixedHc),
            other => Err(PlanError::UnknownModel {
                name: other.to_string(),
            }),
        }
    }
}
