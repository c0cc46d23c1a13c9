//! Service layer for running imports.

mod import;

pub use import::{ImportError, ImportService, read_rows};
