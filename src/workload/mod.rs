//! Per-employee, per-day workload aggregation.
//!
//! Expanded [`crate::task::domain::TaskInstance`] values are summed into
//! [`domain::DayLoad`] cells keyed by employee and date and classified into
//! capacity bands. Reports are recomputed from scratch on every request.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
