//! Bulk import of task rows.
//!
//! Rows arrive as loosely typed JSON objects. Each row is coerced into a
//! [`domain::TaskImportRecord`] at the boundary and handed to a
//! [`ports::RowProcessor`]; failures are counted per row and never stop the
//! batch. [`domain::ImportSession`] tracks one import run for the caller.
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
