//! Period-chained capacity calculation engine.
//!
//! A plan is a hierarchy of business units, lines of business, and
//! teams over a fixed period horizon. The engine walks each team's
//! horizon chronologically, applying one of three staffing models per
//! LOB and threading every period's ending headcount into the next
//! period as its starting point. See [`chain::PlanEngine`] for the run
//! entry point and [`calculator`] for the per-period math.

pub mod aggregate;
pub mod calculator;
pub mod carry_forward;
pub mod chain;
pub mod config;
pub mod cph_model;
pub mod erlang;
pub mod error;
pub mod fixed_hc_model;
pub mod metrics;
pub mod model;
pub mod period;
pub mod sample;
pub mod summary;
pub mod types;
pub mod validate;
pub mod volume_backlog_model;
