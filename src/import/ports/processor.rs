//! Row processor port.

use crate::import::domain::{ImportRow, ImportRowError, RowOutcome};
use async_trait::async_trait;

/// Persists one imported row.
#[async_trait]
pub trait RowProcessor: Send + Sync {
    /// Processes `row`, reporting whether it created or updated a record.
    ///
    /// # Errors
    ///
    /// Returns [`ImportRowError`] when the row cannot be coerced or stored.
    async fn process(&self, row: &ImportRow) -> Result<RowOutcome, ImportRowError>;
}
