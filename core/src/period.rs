//! Planning calendar: period intervals and fiscal header generation.
//!
//! RULE: The fiscal year starts on the Monday of the week containing
//! Jan 22, or Feb 1 in leap years. Week headers carry the week start's
//! calendar year, which can differ from the fiscal year late in the
//! horizon.

use crate::types::{STANDARD_MONTHLY_WORK_MINUTES, STANDARD_WEEKLY_WORK_MINUTES};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Granularity of one planning period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeriodInterval {
    Week,
    Month,
}

impl PeriodInterval {
    /// Paid minutes per head for one period of this interval.
    pub fn standard_work_minutes(&self) -> f64 {
        match self {
            PeriodInterval::Week => STANDARD_WEEKLY_WORK_MINUTES,
            PeriodInterval::Month => STANDARD_MONTHLY_WORK_MINUTES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PeriodInterval::Week => "week",
            PeriodInterval::Month => "month",
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// First day of the given fiscal year: the Monday of the week containing
/// the anchor date (Jan 22, or Feb 1 in leap years).
pub fn fiscal_year_start(fiscal_year: i32) -> NaiveDate {
    let anchor = if is_leap_year(fiscal_year) {
        NaiveDate::from_ymd_opt(fiscal_year, 2, 1)
    } else {
        NaiveDate::from_ymd_opt(fiscal_year, 1, 22)
    }
    .expect("fixed calendar anchor");
    anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64)
}

/// Fiscal week headers of the form `FWk3: 02/12-02/18 (2024)`,
/// numbered from 1 and running consecutively across year boundaries.
pub fn fiscal_week_headers(start_fiscal_year: i32, num_weeks: usize) -> Vec<String> {
    let start = fiscal_year_start(start_fiscal_year);
    (0..num_weeks)
        .map(|i| {
            let week_start = start + Duration::weeks(i as i64);
            let week_end = week_start + Duration::days(6);
            format!(
                "FWk{}: {:02}/{:02}-{:02}/{:02} ({})",
                i + 1,
                week_start.month(),
                week_start.day(),
                week_end.month(),
                week_end.day(),
                week_start.year(),
            )
        })
        .collect()
}

/// Month headers of the form `January 2024`, starting at January of
/// the given year.
pub fn month_headers(start_year: i32, num_months: usize) -> Vec<String> {
    (0..num_months)
        .map(|i| {
            let year = start_year + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is valid");
            first.format("%B %Y").to_string()
        })
        .collect()
}

/// Period headers for a whole horizon under the given interval.
pub fn period_headers(interval: PeriodInterval, start_year: i32, count: usize) -> Vec<String> {
    match interval {
        PeriodInterval::Week => fiscal_week_headers(start_year, count),
        PeriodInterval::Month => month_headers(start_year, count),
    }
}
