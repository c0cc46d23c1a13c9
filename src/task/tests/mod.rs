//! Unit tests for the task context.

mod occurrence_tests;

use chrono::NaiveDate;

/// Builds a date, panicking on invalid input.
pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
