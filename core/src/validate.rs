//! Assumption validation over a plan definition.
//!
//! RULES:
//!   - Findings are advisory. The engine logs them and calculates
//!     anyway; the formulas' own guards keep bad values from exploding.
//!   - Only populated fields are checked. Sparse inputs are a normal
//!     state for a plan under construction, not a defect.
//!   - The volume-mix sum is checked per LOB per period, skipping
//!     periods where no team carries a mix at all.

use crate::config::PlanDefinition;
use serde::{Deserialize, Serialize};

/// Tolerance on the per-period team mix sum before it is flagged.
const MIX_SUM_TOLERANCE: f64 = 0.05;

/// One validation problem, located by scope path and period label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// "BU / LOB" or "BU / LOB / Team".
    pub scope: String,
    /// Period label, when the problem is tied to one period.
    pub period: Option<String>,
    pub message: String,
}

fn check_percentage(
    findings: &mut Vec<ValidationFinding>,
    scope: &str,
    period: &str,
    field: &str,
    value: Option<f64>,
) {
    if let Some(v) = value {
        if !(0.0..=100.0).contains(&v) {
            findings.push(ValidationFinding {
                scope: scope.to_string(),
                period: Some(period.to_string()),
                message: format!("{field} must be between 0 and 100"),
            });
        }
    }
}

/// Scan every populated assumption in the plan and report out-of-range
/// values and inconsistent team mixes.
pub fn validate_plan(plan: &PlanDefinition) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for bu in &plan.business_units {
        for lob in &bu.lobs {
            let lob_scope = format!("{} / {}", bu.name, lob.name);

            for team in &lob.teams {
                let team_scope = format!("{} / {}", lob_scope, team.name);

                for (t, inputs) in team.periods.iter().enumerate() {
                    let period = plan.periods.get(t).map(String::as_str).unwrap_or("");

                    if let Some(aht) = inputs.aht {
                        if aht <= 0.0 {
                            findings.push(ValidationFinding {
                                scope: team_scope.clone(),
                                period: Some(period.to_string()),
                                message: "AHT must be greater than 0".to_string(),
                            });
                        }
                    }
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "In-office shrinkage",
                        inputs.in_office_shrinkage_percentage,
                    );
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "Out-of-office shrinkage",
                        inputs.out_of_office_shrinkage_percentage,
                    );
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "Occupancy",
                        inputs.occupancy_percentage,
                    );
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "Backlog",
                        inputs.backlog_percentage,
                    );
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "Attrition",
                        inputs.attrition_percentage,
                    );
                    check_percentage(
                        &mut findings,
                        &team_scope,
                        period,
                        "Volume mix",
                        inputs.volume_mix_percentage,
                    );
                }
            }

            for (t, period) in plan.periods.iter().enumerate() {
                let mixes: Vec<f64> = lob
                    .teams
                    .iter()
                    .filter_map(|team| team.periods.get(t).and_then(|p| p.volume_mix_percentage))
                    .collect();
                if mixes.is_empty() {
                    continue;
                }
                let sum: f64 = mixes.iter().sum();
                if (sum - 100.0).abs() > MIX_SUM_TOLERANCE {
                    findings.push(ValidationFinding {
                        scope: lob_scope.clone(),
                        period: Some(period.clone()),
                        message: format!("Volume mix across teams sums to {sum:.1}, expected 100"),
                    });
                }
            }
        }
    }

    findings
}
