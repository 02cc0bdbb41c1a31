//! Deterministic sample-plan generation.
//!
//! RULE: Nothing here may call a platform RNG. All randomness flows
//! through a PlanRng seeded from the caller's seed, so a given seed
//! always yields byte-identical plans. The seed is the only input that
//! varies a sample plan besides its horizon.

use crate::{
    config::{BusinessUnitPlan, LobPlan, PlanDefinition, TeamPlan},
    metrics::TeamPeriodInputs,
    model::ModelKind,
    period::{period_headers, PeriodInterval},
};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG for sample-plan generation.
pub struct PlanRng {
    inner: Pcg64Mcg,
}

impl PlanRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll an integer-valued f64 in [lo, hi].
    fn int_between(&mut self, lo: u64, hi: u64) -> f64 {
        (lo + self.next_u64_below(hi - lo + 1)) as f64
    }
}

/// Business units and their LOBs in the sample catalog.
const CATALOG: &[(&str, &[&str])] = &[
    ("Consumer Support", &["US Chat", "US Phone"]),
    ("Seller Support", &["Core Support", "Dispute Management", "Help Desk"]),
];

/// Every LOB gets the same three-team split: one inhouse team and two
/// outsourced ones.
const TEAM_NAMES: &[(&str, bool)] = &[("Inhouse", false), ("BPO1", true), ("BPO2", true)];

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Volume-mix split for `count` teams: equal one-decimal shares, with
/// the last team absorbing the rounding remainder so the splits always
/// sum to exactly 100.
fn mix_for(index: usize, count: usize) -> f64 {
    let share = (100.0 / count as f64 * 10.0).round() / 10.0;
    if index + 1 < count {
        share
    } else {
        let rest = 100.0 - share * (count - 1) as f64;
        ((rest * 10.0).round() / 10.0).max(0.0)
    }
}

/// Generate a fully populated plan: every LOB carries a forecast, the
/// first quarter of the horizon carries uploaded actual volume, and the
/// staffing models cycle so each model kind appears.
pub fn sample_plan(
    seed: u64,
    interval: PeriodInterval,
    num_periods: usize,
    start_fiscal_year: i32,
) -> PlanDefinition {
    let mut rng = PlanRng::new(seed);
    let actual_horizon = num_periods / 4;

    let mut lob_index = 0usize;
    let mut business_units = Vec::with_capacity(CATALOG.len());
    for (bu_name, lob_names) in CATALOG {
        let mut lobs = Vec::with_capacity(lob_names.len());
        for lob_name in *lob_names {
            let model = match lob_index % 3 {
                0 => ModelKind::Cph,
                1 => ModelKind::VolumeBacklog,
                _ => ModelKind::FixedHc,
            };
            lob_index += 1;

            let volume_forecast: Vec<Option<f64>> =
                (0..num_periods).map(|_| Some(rng.int_between(2000, 11999))).collect();
            let actual_volume: Vec<Option<f64>> = (0..num_periods)
                .map(|t| (t < actual_horizon).then(|| rng.int_between(2000, 11999)))
                .collect();
            let average_aht: Vec<Option<f64>> =
                (0..num_periods).map(|_| Some(rng.int_between(5, 14))).collect();
            let metric_requirements: Vec<Option<f64>> = if model == ModelKind::FixedHc {
                (0..num_periods).map(|_| Some(rng.int_between(20, 60))).collect()
            } else {
                Vec::new()
            };

            let teams = TEAM_NAMES
                .iter()
                .enumerate()
                .map(|(i, (team_name, bpo))| {
                    let mix = mix_for(i, TEAM_NAMES.len());
                    let periods = (0..num_periods)
                        .map(|t| TeamPeriodInputs {
                            aht: Some(rng.int_between(5, 14)),
                            in_office_shrinkage_percentage: Some(rng.int_between(5, 14)),
                            out_of_office_shrinkage_percentage: Some(rng.int_between(2, 7)),
                            occupancy_percentage: Some(rng.int_between(70, 89)),
                            backlog_percentage: Some(rng.int_between(0, 9)),
                            attrition_percentage: Some(rng.next_u64_below(21) as f64 / 10.0),
                            volume_mix_percentage: Some(mix),
                            actual_hc: if t == 0 {
                                Some(rng.int_between(10, 59))
                            } else {
                                Some(0.0)
                            },
                            move_in: Some(rng.int_between(0, 4)),
                            move_out: Some(rng.int_between(0, 2)),
                            new_hire_batch: rng.chance(0.3).then(|| rng.int_between(5, 14)),
                            new_hire_production: rng.chance(0.5).then(|| rng.int_between(0, 7)),
                            lob_volume_forecast: volume_forecast[t],
                        })
                        .collect();
                    TeamPlan {
                        name: (*team_name).to_string(),
                        bpo: *bpo,
                        periods,
                        actual_hc_overrides: Vec::new(),
                    }
                })
                .collect();

            lobs.push(LobPlan {
                id: format!("{}_{}", slug(bu_name), slug(lob_name)),
                name: (*lob_name).to_string(),
                model,
                volume_forecast,
                actual_volume,
                average_aht,
                base_required_minutes: Vec::new(),
                metric_requirements,
                teams,
            });
        }
        business_units.push(BusinessUnitPlan { name: (*bu_name).to_string(), lobs });
    }

    PlanDefinition {
        plan_id: format!("sample-{seed}"),
        plan_name: format!("Sample capacity plan (seed {seed})"),
        interval,
        periods: period_headers(interval, start_fiscal_year, num_periods),
        standard_work_minutes: None,
        business_units,
    }
}
