//! Expansion of task templates into date-bound instances.
//!
//! Expansion is a pure function of the task, its overrides and the
//! requested range: calling it twice with the same inputs yields the same
//! ordered sequence, and nothing past the end of the range is ever
//! generated.

use super::{EditableOccurrence, Task, TaskInstance};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::iter::Peekable;
use std::vec;

/// Expands `task` over `range_start..=range_end`.
///
/// Overrides belonging to other tasks are ignored, so callers can pass the
/// full override set. Instances come out ordered by `instance_date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mockable::DefaultClock;
/// use workplan::roster::domain::ProjectId;
/// use workplan::task::domain::{expand, Frequency, Hours, RecurrenceRule, Task};
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date");
/// let end = NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date");
/// let task = Task::new("Stand-up", ProjectId::new(), Hours::from_whole(1), &DefaultClock)
///     .expect("valid task")
///     .with_recurrence(RecurrenceRule::new(start, Frequency::Daily));
///
/// assert_eq!(expand(&task, &[], start, end).count(), 7);
/// ```
#[must_use]
pub fn expand<'a>(
    task: &'a Task,
    overrides: &'a [EditableOccurrence],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Occurrences<'a> {
    let inner = match task.recurrence() {
        Some(_) => Inner::Series(SeriesExpansion::new(task, overrides, range_start, range_end)),
        None => Inner::Single(task.schedule().and_then(|span| {
            span.intersect(range_start, range_end)
                .map(|visible| TaskInstance::one_off(task, visible.start(), span))
        })),
    };
    Occurrences { inner }
}

/// Expands every task over the range and returns the instances ordered by
/// date, then by task.
#[must_use]
pub fn expand_all(
    tasks: &[Task],
    overrides: &[EditableOccurrence],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<TaskInstance> {
    let mut instances: Vec<TaskInstance> = tasks
        .iter()
        .flat_map(|task| expand(task, overrides, range_start, range_end))
        .collect();
    instances.sort_by(|a, b| {
        a.instance_date
            .cmp(&b.instance_date)
            .then_with(|| a.task_id.cmp(&b.task_id))
            .then_with(|| a.occurrence_date.cmp(&b.occurrence_date))
    });
    instances
}

/// Lazy, ordered sequence of instances for one task.
#[derive(Debug)]
pub struct Occurrences<'a> {
    inner: Inner<'a>,
}

#[derive(Debug)]
enum Inner<'a> {
    Single(Option<TaskInstance>),
    Series(SeriesExpansion<'a>),
}

impl Iterator for Occurrences<'_> {
    type Item = TaskInstance;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Single(instance) => instance.take(),
            Inner::Series(series) => series.next(),
        }
    }
}

/// Merges occurrences staying on their generated date with occurrences
/// relocated into the range from elsewhere.
struct SeriesExpansion<'a> {
    task: &'a Task,
    overrides: HashMap<NaiveDate, &'a EditableOccurrence>,
    candidates: Box<dyn Iterator<Item = NaiveDate> + 'a>,
    relocated: Peekable<vec::IntoIter<TaskInstance>>,
    buffered: Option<TaskInstance>,
}

impl std::fmt::Debug for SeriesExpansion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesExpansion")
            .field("task", &self.task.id())
            .field("overrides", &self.overrides.len())
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

impl<'a> SeriesExpansion<'a> {
    fn new(
        task: &'a Task,
        overrides: &'a [EditableOccurrence],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Self {
        let by_date: HashMap<NaiveDate, &'a EditableOccurrence> = overrides
            .iter()
            .filter(|occurrence| occurrence.task_id() == task.id())
            .map(|occurrence| (occurrence.date(), occurrence))
            .collect();

        let candidates: Box<dyn Iterator<Item = NaiveDate> + 'a> = match task.recurrence() {
            Some(rule) => Box::new(rule.dates_within(range_start, range_end)),
            None => Box::new(std::iter::empty()),
        };

        let mut relocated: Vec<TaskInstance> = by_date
            .values()
            .filter(|occurrence| occurrence.is_relocated() && !occurrence.is_removed())
            .filter(|occurrence| {
                let target = occurrence.effective_date();
                range_start <= target && target <= range_end
            })
            .filter(|occurrence| {
                task.recurrence()
                    .is_some_and(|rule| rule.occurs_on(occurrence.date()))
            })
            .map(|occurrence| TaskInstance::occurrence(task, occurrence.date(), Some(occurrence)))
            .collect();
        relocated.sort_by_key(|instance| (instance.instance_date, instance.occurrence_date));

        Self {
            task,
            overrides: by_date,
            candidates,
            relocated: relocated.into_iter().peekable(),
            buffered: None,
        }
    }

    /// Returns the next occurrence that stays on its generated date.
    fn next_in_place(&mut self) -> Option<TaskInstance> {
        for date in self.candidates.by_ref() {
            let exception = self.overrides.get(&date).copied();
            match exception {
                Some(occurrence) if occurrence.is_removed() || occurrence.is_relocated() => {}
                _ => return Some(TaskInstance::occurrence(self.task, date, exception)),
            }
        }
        None
    }
}

impl Iterator for SeriesExpansion<'_> {
    type Item = TaskInstance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffered.is_none() {
            self.buffered = self.next_in_place();
        }
        let relocated_first = match (&self.buffered, self.relocated.peek()) {
            (Some(in_place), Some(moved)) => moved.instance_date < in_place.instance_date,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        if relocated_first {
            self.relocated.next()
        } else {
            self.buffered.take()
        }
    }
}
