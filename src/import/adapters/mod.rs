//! Adapter implementations for import ports.

mod task_rows;

pub use task_rows::TaskRowProcessor;
