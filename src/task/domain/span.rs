//! Inclusive calendar date ranges.

use super::TaskDomainError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days a one-off task is scheduled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Creates a span covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDateSpan`] when `end` precedes
    /// `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TaskDomainError> {
        if end < start {
            return Err(TaskDomainError::InvalidDateSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a span covering a single day.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the last day.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns whether the span covers exactly one day.
    #[must_use]
    pub fn is_single_day(self) -> bool {
        self.start == self.end
    }

    /// Returns whether `date` lies inside the span.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the overlap with `from..=to`, if any.
    #[must_use]
    pub fn intersect(self, from: NaiveDate, to: NaiveDate) -> Option<Self> {
        let start = self.start.max(from);
        let end = self.end.min(to);
        (start <= end).then_some(Self { start, end })
    }

    /// Iterates every day of the span in ascending order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
            .take_while(move |day| *day <= end)
    }
}
