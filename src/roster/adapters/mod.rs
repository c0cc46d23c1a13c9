//! Adapter implementations for roster ports.

pub mod memory;
