//! Domain model for bulk import.

mod error;
mod record;
mod session;
mod summary;

pub use error::{ImportRowError, ImportSessionError};
pub use record::{ImportRow, TaskImportRecord};
pub use session::{ImportPhase, ImportSession};
pub use summary::{ImportSummary, RowOutcome};
