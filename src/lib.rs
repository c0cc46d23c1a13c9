//! Workplan: workload planning for small teams.
//!
//! Tasks carry an estimate, an optional assignee and either a one-off date
//! span or a recurrence rule. Recurring tasks expand into dated instances
//! which can be edited, moved or cancelled one at a time. Instances are
//! aggregated against each employee's daily capacity to show who is
//! overloaded on which day, and a drag-and-drop transport moves work
//! between people and days.
//!
//! # Architecture
//!
//! Every context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`task`]: Tasks, recurrence expansion and per-occurrence overrides
//! - [`roster`]: Employees, capacity and projects
//! - [`workload`]: Per-employee per-day load aggregation
//! - [`allocation`]: Drag-and-drop allocation of tasks and occurrences
//! - [`import`]: Bulk task import from JSON rows
//! - [`workspace`]: Workspace membership and invitations

pub mod allocation;
pub mod import;
pub mod roster;
pub mod task;
pub mod workload;
pub mod workspace;
