//! Employees and their working capacity.

use super::{EmployeeId, RosterDomainError};
use crate::task::domain::Hours;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Working days assumed when an employee has no explicit schedule.
pub const DEFAULT_WORK_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// An employee tasks can be allocated to.
///
/// Capacity is expressed per week and spread evenly across the working
/// days; non-working days have zero capacity.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::roster::domain::Employee;
/// use workplan::task::domain::Hours;
///
/// let employee = Employee::new("Ana", Hours::from_whole(40)).expect("valid employee");
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date");
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date");
/// assert_eq!(employee.capacity_on(monday), Hours::from_whole(8));
/// assert_eq!(employee.capacity_on(sunday), Hours::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    weekly_hours: Hours,
    work_days: Vec<Weekday>,
}

impl Employee {
    /// Creates an employee working the default Monday–Friday week.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyEmployeeName`] when the name is
    /// blank.
    pub fn new(name: impl Into<String>, weekly_hours: Hours) -> Result<Self, RosterDomainError> {
        Self::with_id(EmployeeId::new(), name, weekly_hours)
    }

    /// Creates an employee with a known identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyEmployeeName`] when the name is
    /// blank.
    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        weekly_hours: Hours,
    ) -> Result<Self, RosterDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterDomainError::EmptyEmployeeName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            weekly_hours,
            work_days: DEFAULT_WORK_DAYS.to_vec(),
        })
    }

    /// Replaces the working days.
    ///
    /// Days are deduplicated and ordered Monday first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::NoWorkDays`] when `days` is empty.
    pub fn with_work_days(
        mut self,
        days: impl IntoIterator<Item = Weekday>,
    ) -> Result<Self, RosterDomainError> {
        let mut normalized: Vec<Weekday> = days.into_iter().collect();
        normalized.sort_by_key(Weekday::num_days_from_monday);
        normalized.dedup();
        if normalized.is_empty() {
            return Err(RosterDomainError::NoWorkDays);
        }
        self.work_days = normalized;
        Ok(self)
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contracted weekly hours.
    #[must_use]
    pub const fn weekly_hours(&self) -> Hours {
        self.weekly_hours
    }

    /// Returns the working days, Monday first.
    #[must_use]
    pub fn work_days(&self) -> &[Weekday] {
        &self.work_days
    }

    /// Returns whether `date` falls on one of the employee's working days.
    #[must_use]
    pub fn works_on(&self, date: NaiveDate) -> bool {
        self.work_days.contains(&date.weekday())
    }

    /// Returns the capacity of a single working day.
    #[must_use]
    pub fn daily_capacity(&self) -> Hours {
        self.weekly_hours
            .divide_evenly(self.work_days.len())
            .unwrap_or(Hours::ZERO)
    }

    /// Returns the capacity available on `date`.
    #[must_use]
    pub fn capacity_on(&self, date: NaiveDate) -> Hours {
        if self.works_on(date) {
            self.daily_capacity()
        } else {
            Hours::ZERO
        }
    }
}
