//! Summation of task instances into per-employee day loads.

use super::{Band, DistributionPolicy, PlanningWindow, WorkloadConfig};
use crate::roster::domain::{Employee, EmployeeId};
use crate::task::domain::{Hours, TaskInstance};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Assigned hours and capacity of one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLoad {
    /// Sum of effective estimated time.
    pub assigned_hours: Hours,
    /// Hours the employee can work that day.
    pub capacity_hours: Hours,
    /// Classification of `assigned_hours` against `capacity_hours`.
    pub band: Band,
}

impl DayLoad {
    /// Builds a load and classifies it.
    #[must_use]
    pub fn new(assigned_hours: Hours, capacity_hours: Hours) -> Self {
        Self {
            assigned_hours,
            capacity_hours,
            band: Band::classify(assigned_hours, capacity_hours),
        }
    }

    /// Returns assigned hours as a whole percentage of capacity, rounded
    /// down. `None` when the capacity is zero.
    #[must_use]
    pub fn utilisation_percent(&self) -> Option<u64> {
        let capacity = u64::from(self.capacity_hours.hundredths());
        (u64::from(self.assigned_hours.hundredths()) * 100).checked_div(capacity)
    }

    fn add(&mut self, hours: Hours) {
        *self = Self::new(self.assigned_hours.saturating_add(hours), self.capacity_hours);
    }
}

/// Workload of every employee over a set of instances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkloadReport {
    cells: BTreeMap<(EmployeeId, NaiveDate), DayLoad>,
    unallocated: Vec<TaskInstance>,
    roster: BTreeMap<EmployeeId, Employee>,
}

impl WorkloadReport {
    /// Returns every non-empty cell ordered by employee, then date.
    #[must_use]
    pub const fn cells(&self) -> &BTreeMap<(EmployeeId, NaiveDate), DayLoad> {
        &self.cells
    }

    /// Returns instances nobody is assigned to.
    #[must_use]
    pub fn unallocated(&self) -> &[TaskInstance] {
        &self.unallocated
    }

    /// Returns the load of `employee` on `date`.
    ///
    /// Days without work report zero assigned hours against the employee's
    /// capacity.
    #[must_use]
    pub fn load(&self, employee: EmployeeId, date: NaiveDate) -> DayLoad {
        self.cells
            .get(&(employee, date))
            .copied()
            .unwrap_or_else(|| DayLoad::new(Hours::ZERO, self.capacity_of(employee, date)))
    }

    /// Returns the combined load of the whole roster on `date`.
    #[must_use]
    pub fn team_load(&self, date: NaiveDate) -> DayLoad {
        let assigned: Hours = self
            .cells
            .iter()
            .filter(|((_, day), _)| *day == date)
            .map(|(_, load)| load.assigned_hours)
            .sum();
        let capacity: Hours = self
            .roster
            .values()
            .map(|employee| employee.capacity_on(date))
            .sum();
        DayLoad::new(assigned, capacity)
    }

    /// Total hours waiting in the unallocated pool.
    #[must_use]
    pub fn unallocated_hours(&self) -> Hours {
        self.unallocated
            .iter()
            .map(|instance| instance.estimated_time)
            .sum()
    }

    /// Returns the hours booked on `employee` across the report.
    #[must_use]
    pub fn employee_total(&self, employee: EmployeeId) -> Hours {
        self.cells
            .iter()
            .filter(|((owner, _), _)| *owner == employee)
            .map(|(_, load)| load.assigned_hours)
            .sum()
    }

    /// Keeps only cells and unallocated instances dated inside `window`.
    #[must_use]
    pub fn within(mut self, window: PlanningWindow) -> Self {
        self.cells.retain(|(_, date), _| window.contains(*date));
        self.unallocated
            .retain(|instance| window.contains(instance.instance_date));
        self
    }

    fn capacity_of(&self, employee: EmployeeId, date: NaiveDate) -> Hours {
        self.roster
            .get(&employee)
            .map_or(Hours::ZERO, |known| known.capacity_on(date))
    }

    fn book(&mut self, employee: EmployeeId, date: NaiveDate, hours: Hours) {
        let capacity = self.capacity_of(employee, date);
        self.cells
            .entry((employee, date))
            .or_insert_with(|| DayLoad::new(Hours::ZERO, capacity))
            .add(hours);
    }
}

/// Aggregates instances into per-employee day loads.
///
/// Unassigned instances are listed as unallocated and never counted.
/// Employees missing from `employees` have zero capacity.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mockable::DefaultClock;
/// use workplan::roster::domain::{Employee, ProjectId};
/// use workplan::task::domain::{DateSpan, Hours, Task, TaskInstance};
/// use workplan::workload::domain::{aggregate, Band, WorkloadConfig};
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date");
/// let employee = Employee::new("Ana", Hours::from_whole(40)).expect("valid employee");
/// let task = Task::new("Report", ProjectId::new(), Hours::from_whole(2), &DefaultClock)
///     .expect("valid task")
///     .with_assignee(employee.id());
/// let instance = TaskInstance::one_off(&task, monday, DateSpan::single(monday));
///
/// let report = aggregate(&[instance], &[employee.clone()], WorkloadConfig::default());
/// assert_eq!(report.load(employee.id(), monday).band, Band::UnderUtilised);
/// ```
#[must_use]
pub fn aggregate(
    instances: &[TaskInstance],
    employees: &[Employee],
    config: WorkloadConfig,
) -> WorkloadReport {
    let mut report = WorkloadReport {
        roster: employees
            .iter()
            .map(|employee| (employee.id(), employee.clone()))
            .collect(),
        ..WorkloadReport::default()
    };
    let mut unallocated = Vec::new();

    for instance in instances {
        let Some(employee_id) = instance.assigned_employee_id else {
            unallocated.push(instance.clone());
            continue;
        };
        for (date, hours) in bookings(instance, report.roster.get(&employee_id), config) {
            report.book(employee_id, date, hours);
        }
    }

    report.unallocated = unallocated;
    report
}

/// Splits an instance's hours into per-day bookings.
///
/// Multi-day spans without any of the assignee's work days, or assigned to
/// an unknown employee, fall back to the instance date.
fn bookings(
    instance: &TaskInstance,
    employee: Option<&Employee>,
    config: WorkloadConfig,
) -> Vec<(NaiveDate, Hours)> {
    let single = || vec![(instance.instance_date, instance.estimated_time)];
    if instance.span.is_single_day() || config.distribution == DistributionPolicy::InstanceDate {
        return single();
    }
    let work_days: Vec<NaiveDate> = employee
        .map(|known| {
            instance
                .span
                .days()
                .filter(|date| known.works_on(*date))
                .collect()
        })
        .unwrap_or_default();
    if work_days.is_empty() {
        return single();
    }
    let shares = instance.estimated_time.distribute(work_days.len());
    work_days.into_iter().zip(shares).collect()
}
