use crate::{
    metrics::TeamPeriodInputs,
    model::ModelKind,
    period::PeriodInterval,
    types::{PeriodIndex, PlanId},
};
use serde::{Deserialize, Serialize};

/// A complete plan definition: the period horizon plus the business
/// unit -> line of business -> team hierarchy with per-period inputs.
/// Per-period series are indexed by the position of their period in
/// `periods`; optional series may be empty or must match the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDefinition {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub interval: PeriodInterval,
    pub periods: Vec<String>,
    /// Override of the interval's standard work minutes, if the plan
    /// uses a non-standard paid week.
    #[serde(default)]
    pub standard_work_minutes: Option<f64>,
    pub business_units: Vec<BusinessUnitPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUnitPlan {
    pub name: String,
    pub lobs: Vec<LobPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobPlan {
    pub id: String,
    pub name: String,
    /// Staffing model for every team under this LOB.
    pub model: ModelKind,
    #[serde(default)]
    pub volume_forecast: Vec<Option<f64>>,
    /// Uploaded actuals; where present they win over the forecast.
    #[serde(default)]
    pub actual_volume: Vec<Option<f64>>,
    /// LOB-level average AHT in minutes, for the base-minutes pass.
    #[serde(default)]
    pub average_aht: Vec<Option<f64>>,
    /// Direct base-required-minutes input; wins over volume x AHT.
    #[serde(default)]
    pub base_required_minutes: Vec<Option<f64>>,
    /// Metric-level required-HC hints consumed by the fixed-HC model.
    #[serde(default)]
    pub metric_requirements: Vec<Option<f64>>,
    pub teams: Vec<TeamPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPlan {
    pub name: String,
    #[serde(default)]
    pub bpo: bool,
    /// One input record per period, same order as the plan's horizon.
    pub periods: Vec<TeamPeriodInputs>,
    /// Per-period explicit actual-HC overrides (the call-level input,
    /// distinct from the stored `actual_hc` field on the records).
    #[serde(default)]
    pub actual_hc_overrides: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct PlanFile {
    plan: PlanDefinition,
}

impl PlanDefinition {
    /// Load a plan from a JSON file.
    /// In tests, use PlanDefinition::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: PlanFile = serde_json::from_str(&content)?;
        Ok(file.plan)
    }

    /// Paid minutes per head per period for this plan.
    pub fn standard_minutes(&self) -> f64 {
        self.standard_work_minutes
            .unwrap_or_else(|| self.interval.standard_work_minutes())
    }

    /// Plan with hardcoded values for use in unit tests. Two teams over
    /// three weekly periods; the Inhouse team rolls forward under
    /// attrition, the BPO team under the vendor regime.
    pub fn default_test() -> Self {
        let inhouse = TeamPlan {
            name: "Inhouse".into(),
            bpo: false,
            periods: vec![
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    attrition_percentage: Some(5.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(100.0),
                    ..Default::default()
                },
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    attrition_percentage: Some(5.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(0.0),
                    move_in: Some(2.0),
                    move_out: Some(3.0),
                    new_hire_production: Some(10.0),
                    ..Default::default()
                },
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    attrition_percentage: Some(5.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(0.0),
                    move_in: Some(0.0),
                    move_out: Some(0.0),
                    new_hire_production: Some(0.0),
                    ..Default::default()
                },
            ],
            actual_hc_overrides: vec![],
        };

        let bpo = TeamPlan {
            name: "BPO1".into(),
            bpo: true,
            periods: vec![
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(50.0),
                    ..Default::default()
                },
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(0.0),
                    move_in: Some(1.0),
                    move_out: Some(1.0),
                    new_hire_production: Some(4.0),
                    ..Default::default()
                },
                TeamPeriodInputs {
                    aht: Some(300.0),
                    in_office_shrinkage_percentage: Some(10.0),
                    out_of_office_shrinkage_percentage: Some(5.0),
                    occupancy_percentage: Some(80.0),
                    backlog_percentage: Some(10.0),
                    volume_mix_percentage: Some(50.0),
                    actual_hc: Some(0.0),
                    move_in: Some(1.0),
                    move_out: Some(1.0),
                    new_hire_production: Some(4.0),
                    ..Default::default()
                },
            ],
            actual_hc_overrides: vec![],
        };

        Self {
            plan_id: "plan-test".into(),
            plan_name: "Test Plan".into(),
            interval: PeriodInterval::Week,
            periods: vec![
                "FWk1: 01/29-02/04 (2024)".into(),
                "FWk2: 02/05-02/11 (2024)".into(),
                "FWk3: 02/12-02/18 (2024)".into(),
            ],
            standard_work_minutes: None,
            business_units: vec![BusinessUnitPlan {
                name: "Consumer Support".into(),
                lobs: vec![LobPlan {
                    id: "consumer-support_us-chat".into(),
                    name: "US Chat".into(),
                    model: ModelKind::Cph,
                    volume_forecast: vec![Some(10000.0), Some(10000.0), Some(8000.0)],
                    actual_volume: vec![Some(9500.0), None, None],
                    average_aht: vec![Some(5.0), Some(5.0), Some(6.0)],
                    base_required_minutes: vec![],
                    metric_requirements: vec![],
                    teams: vec![inhouse, bpo],
                }],
            }],
        }
    }
}

impl LobPlan {
    /// Volume the formulas see for a period: the uploaded actual when
    /// present, else the forecast.
    pub fn effective_volume(&self, period: PeriodIndex) -> Option<f64> {
        series_value(&self.actual_volume, period).or_else(|| series_value(&self.volume_forecast, period))
    }

    /// Whether the period's volume came from uploaded actuals.
    pub fn has_actual_volume(&self, period: PeriodIndex) -> bool {
        series_value(&self.actual_volume, period).is_some()
    }
}

/// Read one slot of an optional per-period series.
pub fn series_value(series: &[Option<f64>], period: PeriodIndex) -> Option<f64> {
    series.get(period).copied().flatten()
}
