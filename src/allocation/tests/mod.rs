//! Unit tests for the allocation context.

mod transport_tests;

use chrono::NaiveDate;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
