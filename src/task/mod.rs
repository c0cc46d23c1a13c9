//! Task templates, recurrence expansion and per-occurrence overrides.
//!
//! A recurring task's rule generates its occurrence dates; stored
//! [`domain::EditableOccurrence`] records override or cancel single
//! occurrences, and [`domain::expand`] merges both into date-bound instances.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
