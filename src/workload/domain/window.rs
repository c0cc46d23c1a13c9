//! Calendar windows workload is reported over.

use super::WorkloadDomainError;
use chrono::{Datelike, Days, Months, NaiveDate};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Inclusive range of days a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanningWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl PlanningWindow {
    /// Creates a window covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::InvalidWindow`] when `end` precedes
    /// `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WorkloadDomainError> {
        if end < start {
            return Err(WorkloadDomainError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the Sunday-to-Saturday week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::OutOfCalendar`] at the edges of the
    /// supported date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use workplan::workload::domain::PlanningWindow;
    ///
    /// let wednesday = NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");
    /// let week = PlanningWindow::week_of(wednesday).expect("valid week");
    /// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date"));
    /// assert_eq!(week.days().count(), 7);
    /// ```
    pub fn week_of(date: NaiveDate) -> Result<Self, WorkloadDomainError> {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        let start = date
            .checked_sub_days(Days::new(offset))
            .ok_or(WorkloadDomainError::OutOfCalendar(date))?;
        let end = start
            .checked_add_days(Days::new(6))
            .ok_or(WorkloadDomainError::OutOfCalendar(date))?;
        Ok(Self { start, end })
    }

    /// Returns the full Sunday-start weeks covering the month of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::OutOfCalendar`] at the edges of the
    /// supported date range.
    pub fn month_of(date: NaiveDate) -> Result<Self, WorkloadDomainError> {
        let out_of_calendar = || WorkloadDomainError::OutOfCalendar(date);
        let first = date.with_day(1).ok_or_else(out_of_calendar)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(out_of_calendar)?;
        Ok(Self {
            start: Self::week_of(first)?.start,
            end: Self::week_of(last)?.end,
        })
    }

    /// Returns the week containing today according to `clock`.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningWindow::week_of`].
    pub fn current_week(clock: &impl Clock) -> Result<Self, WorkloadDomainError> {
        Self::week_of(clock.utc().date_naive())
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

    /// Returns whether `date` lies inside the window.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates every day of the window in ascending order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.succ_opt())
            .take_while(move |day| *day <= end)
    }
}
