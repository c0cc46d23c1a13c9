//! Override records of single occurrences.

use super::date;
use crate::roster::domain::{EmployeeId, ProjectId};
use crate::task::domain::{
    AssigneeOverride, EditableOccurrence, Frequency, Hours, OccurrenceOverride, RecurrenceRule,
    Task,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn task() -> Task {
    Task::new("Stand-up", ProjectId::new(), Hours::from_whole(1), &DefaultClock)
        .expect("valid task")
        .with_assignee(EmployeeId::new())
        .with_recurrence(RecurrenceRule::new(date(2025, 3, 3), Frequency::Daily))
}

#[rstest]
fn capture_snapshots_base_values(task: Task) {
    let occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));

    assert_eq!(occurrence.original().estimated_time, Hours::from_whole(1));
    assert_eq!(
        occurrence.original().assigned_employee_id,
        task.assigned_employee_id()
    );
    assert!(occurrence.changes().is_empty());
}

#[rstest]
fn applying_the_same_patch_twice_is_idempotent(task: Task) {
    let patch = OccurrenceOverride::assign(None).moved_to(date(2025, 3, 6));
    let mut once = EditableOccurrence::capture(&task, date(2025, 3, 4));
    once.apply(&patch);
    let mut twice = once.clone();
    twice.apply(&patch);

    assert_eq!(once, twice);
}

#[rstest]
fn unassigned_override_returns_occurrence_to_pool(task: Task) {
    let mut occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));
    occurrence.apply(&OccurrenceOverride::assign(None));

    assert_eq!(
        occurrence.changes().assignee,
        Some(AssigneeOverride::Unassigned)
    );
    assert_eq!(occurrence.effective_assignee(task.assigned_employee_id()), None);
}

#[rstest]
fn moving_back_to_generated_date_clears_relocation(task: Task) {
    let mut occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));
    occurrence.apply(&OccurrenceOverride::default().moved_to(date(2025, 3, 6)));
    assert!(occurrence.is_relocated());

    occurrence.apply(&OccurrenceOverride::default().moved_to(date(2025, 3, 4)));

    assert!(!occurrence.is_relocated());
    assert_eq!(occurrence.effective_date(), date(2025, 3, 4));
}

#[rstest]
fn diff_reports_only_real_changes(task: Task) {
    let mut occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));
    occurrence.apply(
        &OccurrenceOverride::estimate(Hours::from_whole(1))
            .moved_to(date(2025, 3, 5)),
    );
    occurrence.apply(&OccurrenceOverride::assign(task.assigned_employee_id()));

    let diff = occurrence.diff_from_original();

    assert_eq!(diff.estimated_time, None);
    assert_eq!(diff.assignee, None);
    assert_eq!(diff.moved_to, Some(date(2025, 3, 5)));
}

#[rstest]
fn remove_and_restore_keep_other_changes(task: Task) {
    let mut occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));
    occurrence.apply(&OccurrenceOverride::estimate(Hours::from_whole(3)));
    occurrence.mark_removed();
    assert!(occurrence.is_removed());

    occurrence.restore();

    assert!(!occurrence.is_removed());
    assert_eq!(
        occurrence.effective_estimated_time(Hours::from_whole(1)),
        Hours::from_whole(3)
    );
}

#[rstest]
fn override_serializes_under_override_key(task: Task) {
    let mut occurrence = EditableOccurrence::capture(&task, date(2025, 3, 4));
    occurrence.apply(&OccurrenceOverride::estimate(Hours::from_hundredths(250)));

    let json = serde_json::to_value(&occurrence).expect("serializable");

    assert_eq!(json["override"]["estimated_time"], 250);
    assert!(json["override"].get("moved_to").is_none());
    assert_eq!(json["is_removed"], false);
}
