//! Recurrence rules that generate occurrence dates for task templates.

use super::TaskDomainError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Upper bound on empty periods skipped while searching for the next
/// monthly date (a 29th/30th/31st anchor can miss several months in a row).
const MAX_MONTHLY_PROBES: u32 = 48;

/// First day of the week that `interval` counts in, matching planning weeks.
const WEEK_START: Weekday = Weekday::Sun;

/// How often a rule repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frequency {
    /// Every `interval` days.
    Daily,
    /// On the listed weekdays of every `interval`-th Sunday-start week.
    Weekly {
        /// Weekdays the task repeats on. Empty means the anchor's weekday.
        days: Vec<Weekday>,
    },
    /// On the anchor's day of the month, every `interval` months. Months
    /// without that day are skipped.
    Monthly,
}

/// When a series stops producing dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RecurrenceEnd {
    /// The series is open-ended; callers bound it with a date range.
    Never,
    /// The series ends on this date, inclusive.
    Until(NaiveDate),
    /// The series ends after this many generated dates.
    AfterOccurrences(u32),
}

/// A recurrence rule anchored on its first date.
///
/// The rule is the only source of occurrence dates for a recurring task;
/// per-date overrides can alter or remove generated dates but never add
/// new ones.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use workplan::task::domain::{Frequency, RecurrenceRule};
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date");
/// let rule = RecurrenceRule::new(
///     monday,
///     Frequency::Weekly { days: vec![Weekday::Mon, Weekday::Thu] },
/// );
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).expect("valid date");
/// let dates: Vec<_> = rule.dates_within(monday, sunday).collect();
/// assert_eq!(dates.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    starts_on: NaiveDate,
    frequency: Frequency,
    interval: u32,
    end: RecurrenceEnd,
}

impl RecurrenceRule {
    /// Creates an open-ended rule repeating every period.
    #[must_use]
    pub fn new(starts_on: NaiveDate, frequency: Frequency) -> Self {
        let normalized = match frequency {
            Frequency::Weekly { mut days } => {
                if days.is_empty() {
                    days.push(starts_on.weekday());
                }
                days.sort_by_key(Weekday::num_days_from_monday);
                days.dedup();
                Frequency::Weekly { days }
            }
            other => other,
        };
        Self {
            starts_on,
            frequency: normalized,
            interval: 1,
            end: RecurrenceEnd::Never,
        }
    }

    /// Sets the number of periods between repetitions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroRecurrenceInterval`] for zero.
    pub fn with_interval(mut self, interval: u32) -> Result<Self, TaskDomainError> {
        if interval == 0 {
            return Err(TaskDomainError::ZeroRecurrenceInterval);
        }
        self.interval = interval;
        Ok(self)
    }

    /// Sets the end condition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::RecurrenceEndsBeforeStart`] when an end
    /// date precedes the anchor and
    /// [`TaskDomainError::ZeroOccurrenceCount`] for a zero count.
    pub fn ending(mut self, end: RecurrenceEnd) -> Result<Self, TaskDomainError> {
        match end {
            RecurrenceEnd::Until(until) if until < self.starts_on => {
                return Err(TaskDomainError::RecurrenceEndsBeforeStart {
                    starts_on: self.starts_on,
                    until,
                });
            }
            RecurrenceEnd::AfterOccurrences(0) => {
                return Err(TaskDomainError::ZeroOccurrenceCount);
            }
            _ => {}
        }
        self.end = end;
        Ok(self)
    }

    /// Returns the anchor date.
    #[must_use]
    pub const fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    /// Returns the repetition frequency.
    #[must_use]
    pub const fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Returns the number of periods between repetitions.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Returns the end condition.
    #[must_use]
    pub const fn end(&self) -> RecurrenceEnd {
        self.end
    }

    /// Iterates every generated date from the anchor onwards.
    ///
    /// Open-ended rules yield an unbounded iterator; use
    /// [`RecurrenceRule::dates_within`] to bound it.
    #[must_use]
    pub fn dates(&self) -> RuleDates<'_> {
        RuleDates::starting_at(self, self.starts_on)
    }

    /// Iterates generated dates inside `from..=to` in ascending order.
    ///
    /// Never looks past `to`, so open-ended rules stay finite.
    pub fn dates_within(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = NaiveDate> + '_ {
        // Count-bounded series must be walked from the anchor to keep the
        // count right; other series can start at the range.
        let first = match self.end {
            RecurrenceEnd::AfterOccurrences(_) => self.starts_on,
            RecurrenceEnd::Never | RecurrenceEnd::Until(_) => from.max(self.starts_on),
        };
        RuleDates::starting_at(self, first)
            .skip_while(move |date| *date < from)
            .take_while(move |date| *date <= to)
    }

    /// Returns whether the rule generates `date`.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.dates_within(date, date).next().is_some()
    }

    /// Returns the first date on or after `from` matching the pattern,
    /// ignoring the end condition.
    fn next_candidate(&self, from: NaiveDate) -> Option<NaiveDate> {
        let start = from.max(self.starts_on);
        match &self.frequency {
            Frequency::Daily => self.next_daily(start),
            Frequency::Weekly { days } => self.next_weekly(start, days),
            Frequency::Monthly => self.next_monthly(start),
        }
    }

    fn next_daily(&self, from: NaiveDate) -> Option<NaiveDate> {
        let offset = u64::try_from(from.signed_duration_since(self.starts_on).num_days()).ok()?;
        let interval = u64::from(self.interval);
        let periods = offset.checked_add(interval - 1)?.div_euclid(interval);
        self.starts_on
            .checked_add_days(Days::new(periods.checked_mul(interval)?))
    }

    fn next_weekly(&self, from: NaiveDate, days: &[Weekday]) -> Option<NaiveDate> {
        let anchor_week = self.starts_on.week(WEEK_START).first_day();
        let horizon = u64::from(self.interval).checked_mul(7)?;
        (0..horizon)
            .filter_map(|step| from.checked_add_days(Days::new(step)))
            .find(|candidate| {
                let week_offset = candidate
                    .week(WEEK_START)
                    .first_day()
                    .signed_duration_since(anchor_week)
                    .num_days()
                    .div_euclid(7);
                days.contains(&candidate.weekday())
                    && week_offset.rem_euclid(i64::from(self.interval)) == 0
            })
    }

    fn next_monthly(&self, from: NaiveDate) -> Option<NaiveDate> {
        let anchor_index = month_index(self.starts_on);
        let elapsed = u32::try_from(month_index(from) - anchor_index).ok()?;
        let first_period = elapsed.div_euclid(self.interval);
        (first_period..first_period.saturating_add(MAX_MONTHLY_PROBES))
            .filter_map(|period| {
                let index = anchor_index + i64::from(period.checked_mul(self.interval)?);
                let year = i32::try_from(index.div_euclid(12)).ok()?;
                let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
                NaiveDate::from_ymd_opt(year, month, self.starts_on.day())
            })
            .find(|candidate| *candidate >= from)
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Iterator over the dates a [`RecurrenceRule`] generates.
#[derive(Debug, Clone)]
pub struct RuleDates<'a> {
    rule: &'a RecurrenceRule,
    cursor: Option<NaiveDate>,
    remaining: Option<u32>,
}

impl<'a> RuleDates<'a> {
    fn starting_at(rule: &'a RecurrenceRule, from: NaiveDate) -> Self {
        let remaining = match rule.end {
            RecurrenceEnd::AfterOccurrences(count) => Some(count),
            RecurrenceEnd::Never | RecurrenceEnd::Until(_) => None,
        };
        Self {
            rule,
            cursor: Some(from),
            remaining,
        }
    }
}

impl Iterator for RuleDates<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let from = self.cursor?;
        let Some(date) = self.rule.next_candidate(from) else {
            self.cursor = None;
            return None;
        };
        if let RecurrenceEnd::Until(until) = self.rule.end
            && date > until
        {
            self.cursor = None;
            return None;
        }
        self.cursor = date.succ_opt();
        self.remaining = self.remaining.map(|count| count.saturating_sub(1));
        Some(date)
    }
}
