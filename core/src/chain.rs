//! The plan engine. Walks a plan's period chain end to end.
//!
//! EXECUTION ORDER per run (fixed, documented, never reordered):
//!   1. Validate assumptions and log the findings.
//!   2. Per LOB: resolve the base-required-minutes series.
//!   3. Per team: walk the horizon chronologically, threading each
//!      period's ending HC into the next period's last HC.
//!   4. Roll teams up into LOB lines, LOB lines into BU lines.
//!   5. Per LOB: build the required-HC summary.
//!
//! RULES:
//!   - Period t reads only period t-1's ending HC, nothing later.
//!   - The first period starts from last HC 0.
//!   - Teams never read each other's records.
//!   - A run is pure over its plan: same plan in, same results out.

use crate::{
    aggregate::{self, AggregatedPeriodicMetrics},
    calculator::calculate_team_metrics_for_period,
    config::{series_value, LobPlan, PlanDefinition, TeamPlan},
    error::{PlanError, PlanResult},
    metrics::TeamPeriodicMetrics,
    model::{ModelKind, PeriodCall},
    period::PeriodInterval,
    summary::{self, PeriodHcResult, SummaryStats, VolumeKind},
    types::{PlanId, RunId},
    validate::{validate_plan, ValidationFinding},
};
use serde::{Deserialize, Serialize};

/// Complete output of one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRun {
    pub run_id: RunId,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub interval: PeriodInterval,
    pub period_labels: Vec<String>,
    pub standard_work_minutes: f64,
    pub findings: Vec<ValidationFinding>,
    pub business_units: Vec<BusinessUnitResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUnitResult {
    pub name: String,
    pub rollup: Vec<AggregatedPeriodicMetrics>,
    pub lobs: Vec<LobResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobResult {
    pub id: String,
    pub name: String,
    pub model: ModelKind,
    pub base_required_minutes: Vec<Option<f64>>,
    pub rollup: Vec<AggregatedPeriodicMetrics>,
    pub summary: SummaryStats,
    pub teams: Vec<TeamResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    pub name: String,
    pub is_bpo: bool,
    pub periods: Vec<TeamPeriodicMetrics>,
}

#[derive(Debug)]
pub struct PlanEngine {
    pub run_id: RunId,
    plan: PlanDefinition,
}

impl PlanEngine {
    /// Build an engine over a plan, rejecting malformed shapes up front
    /// so the run itself cannot fail. Every non-empty per-period series
    /// must match the plan's horizon exactly.
    pub fn new(plan: PlanDefinition) -> PlanResult<Self> {
        let n = plan.periods.len();
        if n == 0 {
            return Err(PlanError::EmptyPlan { plan_id: plan.plan_id.clone() });
        }

        for bu in &plan.business_units {
            for lob in &bu.lobs {
                check_series(&lob.volume_forecast, n, &lob.id, "volume_forecast")?;
                check_series(&lob.actual_volume, n, &lob.id, "actual_volume")?;
                check_series(&lob.average_aht, n, &lob.id, "average_aht")?;
                check_series(&lob.base_required_minutes, n, &lob.id, "base_required_minutes")?;
                check_series(&lob.metric_requirements, n, &lob.id, "metric_requirements")?;

                for team in &lob.teams {
                    if team.periods.len() != n {
                        return Err(PlanError::PeriodCountMismatch {
                            scope: format!("LOB '{}' team '{}'", lob.id, team.name),
                            expected: n,
                            actual: team.periods.len(),
                        });
                    }
                    if !team.actual_hc_overrides.is_empty() && team.actual_hc_overrides.len() != n {
                        return Err(PlanError::PeriodCountMismatch {
                            scope: format!(
                                "LOB '{}' team '{}' actual_hc_overrides",
                                lob.id, team.name
                            ),
                            expected: n,
                            actual: team.actual_hc_overrides.len(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            plan,
        })
    }

    /// Calculate the whole plan. Infallible once the shape checks in
    /// new() have passed.
    pub fn run(&self) -> PlanRun {
        let plan = &self.plan;
        let n = plan.periods.len();
        let standard_minutes = plan.standard_minutes();

        let findings = validate_plan(plan);
        for finding in &findings {
            match &finding.period {
                Some(p) => log::warn!("[{}] {} ({p})", finding.scope, finding.message),
                None => log::warn!("[{}] {}", finding.scope, finding.message),
            }
        }

        let mut business_units = Vec::with_capacity(plan.business_units.len());
        for bu in &plan.business_units {
            let mut lob_results = Vec::with_capacity(bu.lobs.len());
            for lob in &bu.lobs {
                let lob_result = self.run_lob(lob, n, standard_minutes);
                log::debug!(
                    "LOB {} calculated: {} teams, total required {:.1} over {} periods",
                    lob.id,
                    lob_result.teams.len(),
                    lob_result.summary.total_required_hc,
                    n
                );
                lob_results.push(lob_result);
            }

            let rollup = aggregate::rollup_lobs(
                &lob_results.iter().map(|l| l.rollup.clone()).collect::<Vec<_>>(),
                n,
            );
            business_units.push(BusinessUnitResult {
                name: bu.name.clone(),
                rollup,
                lobs: lob_results,
            });
        }

        log::info!(
            "Run {} calculated plan '{}': {} business units, {} periods, {} findings",
            self.run_id,
            plan.plan_id,
            business_units.len(),
            n,
            findings.len()
        );

        PlanRun {
            run_id: self.run_id.clone(),
            plan_id: plan.plan_id.clone(),
            plan_name: plan.plan_name.clone(),
            interval: plan.interval,
            period_labels: plan.periods.clone(),
            standard_work_minutes: standard_minutes,
            findings,
            business_units,
        }
    }

    fn run_lob(&self, lob: &LobPlan, n: usize, standard_minutes: f64) -> LobResult {
        let base_minutes = aggregate::lob_base_required_minutes(lob, n);

        let mut teams = Vec::with_capacity(lob.teams.len());
        for team in &lob.teams {
            teams.push(TeamResult {
                name: team.name.clone(),
                is_bpo: team.bpo,
                periods: self.run_team_chain(lob, team, &base_minutes, standard_minutes),
            });
        }

        let rollup = aggregate::rollup_teams(
            &teams.iter().map(|t| t.periods.clone()).collect::<Vec<_>>(),
            &base_minutes,
        );

        let summary_rows: Vec<PeriodHcResult> = (0..n)
            .filter_map(|t| {
                let volume = lob.effective_volume(t).unwrap_or(0.0);
                if volume <= 0.0 {
                    return None;
                }
                Some(PeriodHcResult {
                    period: self.plan.periods[t].clone(),
                    volume,
                    required_hc: rollup[t].required_hc,
                    kind: if lob.has_actual_volume(t) {
                        VolumeKind::Actual
                    } else {
                        VolumeKind::Forecasted
                    },
                })
            })
            .collect();

        LobResult {
            id: lob.id.clone(),
            name: lob.name.clone(),
            model: lob.model,
            base_required_minutes: base_minutes,
            rollup,
            summary: summary::summarize(&summary_rows),
            teams,
        }
    }

    /// The chain itself: one pass over the horizon, each period seeded
    /// with the previous period's ending HC.
    fn run_team_chain(
        &self,
        lob: &LobPlan,
        team: &TeamPlan,
        base_minutes: &[Option<f64>],
        standard_minutes: f64,
    ) -> Vec<TeamPeriodicMetrics> {
        let mut last_hc = 0.0;
        let mut periods = Vec::with_capacity(team.periods.len());

        for (t, inputs) in team.periods.iter().enumerate() {
            let call = PeriodCall {
                lob_total_base_required_minutes: base_minutes[t],
                standard_work_minutes: standard_minutes,
                volume: lob.effective_volume(t).unwrap_or(0.0),
                metric_required_hc: series_value(&lob.metric_requirements, t).unwrap_or(0.0),
                actual_hc: series_value(&team.actual_hc_overrides, t).unwrap_or(0.0),
                last_hc,
                is_bpo: team.bpo,
            };
            let record = calculate_team_metrics_for_period(lob.model, inputs, &call);
            last_hc = record.ending_hc.unwrap_or(0.0);
            periods.push(record);
        }

        periods
    }
}

fn check_series(series: &[Option<f64>], expected: usize, lob_id: &str, name: &str) -> PlanResult<()> {
    if !series.is_empty() && series.len() != expected {
        return Err(PlanError::PeriodCountMismatch {
            scope: format!("LOB '{lob_id}' {name}"),
            expected,
            actual: series.len(),
        });
    }
    Ok(())
}
