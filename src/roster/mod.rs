//! Team roster reference data: employees and projects.
//!
//! Employees carry the weekly capacity and working days that the workload
//! aggregator turns into per-day capacity. Projects are reference-only and
//! are joined for display. Neither is mutated during a planning session.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
