//! Step definitions for allocation scenarios.

mod given;
mod then;
mod when;
pub mod world;
