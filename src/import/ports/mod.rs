//! Port contracts for row processing.

mod processor;

pub use processor::RowProcessor;
