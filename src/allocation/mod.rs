//! Drag-and-drop reallocation of tasks and single occurrences.
//!
//! A [`domain::DragGesture`] turns pointer interactions into
//! [`domain::AllocationRequest`] values. [`domain::resolve`] decides whether
//! a request mutates the base task, upserts an occurrence override or is
//! rejected, and [`services::AllocationService`] applies that decision to
//! the repositories.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
