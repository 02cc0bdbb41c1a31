//! Shared primitive types used across the entire planning engine.

/// Zero-based index of a period within a plan's horizon.
pub type PeriodIndex = usize;

/// A stable, unique identifier for a plan definition.
pub type PlanId = String;

/// The canonical run identifier.
pub type RunId = String;

/// Paid minutes per head for one weekly period (40 hours).
pub const STANDARD_WEEKLY_WORK_MINUTES: f64 = 40.0 * 60.0;

/// Paid minutes per head for one monthly period (40 hours x 52 weeks / 12).
pub const STANDARD_MONTHLY_WORK_MINUTES: f64 = 40.0 * 52.0 / 12.0 * 60.0;
