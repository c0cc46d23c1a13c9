//! Coercion of loose rows into task records.

use super::ImportRowError;
use crate::roster::domain::{EmployeeId, ProjectId};
use crate::task::domain::{DateSpan, Hours, TaskId};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::str::FromStr;

/// One spreadsheet row keyed by column header.
pub type ImportRow = Map<String, Value>;

/// A task row with every column checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskImportRecord {
    /// Existing task to update; absent rows create a task.
    pub id: Option<TaskId>,
    /// Task name.
    pub name: String,
    /// Estimated effort.
    pub estimated_time: Hours,
    /// Owning project; required when creating.
    pub project_id: Option<ProjectId>,
    /// `None` leaves the assignee alone, `Some(None)` unassigns.
    pub assignee: Option<Option<EmployeeId>>,
    /// One-off schedule.
    pub schedule: Option<DateSpan>,
    /// Description.
    pub description: Option<String>,
}

impl TaskImportRecord {
    /// Coerces a loose row.
    ///
    /// Numbers and numeric strings are both accepted for hours; blank cells
    /// count as absent. A row with only a start date is scheduled on that
    /// single day.
    ///
    /// # Errors
    ///
    /// Returns [`ImportRowError::MissingField`] when `name` or
    /// `estimated_time` is absent and [`ImportRowError::InvalidField`] for
    /// malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use workplan::import::domain::{ImportRow, TaskImportRecord};
    /// use workplan::task::domain::Hours;
    ///
    /// let row: ImportRow = serde_json::from_value(json!({
    ///     "name": "Quarterly report",
    ///     "estimated_time": "4.5",
    /// }))
    /// .expect("object row");
    /// let record = TaskImportRecord::from_row(&row).expect("valid row");
    /// assert_eq!(record.estimated_time, Hours::from_hundredths(450));
    /// ```
    pub fn from_row(row: &ImportRow) -> Result<Self, ImportRowError> {
        let name = text(row, "name")?.ok_or(ImportRowError::MissingField("name"))?;
        let estimated_time =
            hours(row, "estimated_time")?.ok_or(ImportRowError::MissingField("estimated_time"))?;
        let assignee = if row.contains_key("assigned_employee_id") {
            Some(parsed::<EmployeeId>(row, "assigned_employee_id")?)
        } else {
            None
        };

        Ok(Self {
            id: parsed(row, "id")?,
            name,
            estimated_time,
            project_id: parsed(row, "project_id")?,
            assignee,
            schedule: schedule(row)?,
            description: text(row, "description")?,
        })
    }
}

fn invalid(field: &'static str, value: &Value) -> ImportRowError {
    ImportRowError::InvalidField {
        field,
        value: value.to_string(),
    }
}

/// Trimmed, non-blank text of a cell. Numbers are rendered as text.
fn text(row: &ImportRow, field: &'static str) -> Result<Option<String>, ImportRowError> {
    let Some(value) = row.get(field) else {
        return Ok(None);
    };
    let raw = match value {
        Value::Null => return Ok(None),
        Value::String(raw) => raw.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            return Err(invalid(field, value));
        }
    };
    Ok((!raw.is_empty()).then_some(raw))
}

fn parsed<T: FromStr>(row: &ImportRow, field: &'static str) -> Result<Option<T>, ImportRowError> {
    text(row, field)?
        .map(|raw| {
            raw.parse()
                .map_err(|_| ImportRowError::InvalidField { field, value: raw })
        })
        .transpose()
}

/// Hours of a cell. Numeric cells are rounded to hundredths; text must be
/// exact.
fn hours(row: &ImportRow, field: &'static str) -> Result<Option<Hours>, ImportRowError> {
    match row.get(field) {
        Some(Value::Number(number)) => {
            let raw = number.to_string();
            Hours::parse_rounded(&raw)
                .map(Some)
                .map_err(|_| ImportRowError::InvalidField { field, value: raw })
        }
        _ => parsed(row, field),
    }
}

fn schedule(row: &ImportRow) -> Result<Option<DateSpan>, ImportRowError> {
    let start = parsed::<NaiveDate>(row, "start_date")?;
    let end = parsed::<NaiveDate>(row, "end_date")?;
    match (start, end) {
        (None, None) => Ok(None),
        (Some(day), None) => Ok(Some(DateSpan::single(day))),
        (None, Some(_)) => Err(ImportRowError::MissingField("start_date")),
        (Some(first), Some(last)) => Ok(Some(DateSpan::new(first, last)?)),
    }
}
