//! Sequential batch import.

use crate::import::{
    domain::{ImportRow, ImportSession, ImportSessionError, ImportSummary},
    ports::RowProcessor,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors that stop an import before any row is processed.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input is not a list of row objects.
    #[error("could not read import rows: {0}")]
    Read(#[from] serde_json::Error),

    /// The session is in the wrong phase.
    #[error(transparent)]
    Session(#[from] ImportSessionError),
}

/// Decodes rows from a JSON array of objects.
///
/// # Errors
///
/// Returns [`ImportError::Read`] when the input is not an array of objects.
pub fn read_rows(raw: &str) -> Result<Vec<ImportRow>, ImportError> {
    Ok(serde_json::from_str(raw)?)
}

/// Feeds rows to a [`RowProcessor`] one at a time.
#[derive(Clone)]
pub struct ImportService<P>
where
    P: RowProcessor,
{
    processor: Arc<P>,
}

impl<P> ImportService<P>
where
    P: RowProcessor,
{
    /// Creates a new import service.
    #[must_use]
    pub const fn new(processor: Arc<P>) -> Self {
        Self { processor }
    }

    /// Processes every row in order and counts the outcomes.
    ///
    /// A failing row is logged and counted; later rows still run.
    pub async fn import(&self, rows: &[ImportRow]) -> ImportSummary {
        let mut summary = ImportSummary {
            total: rows.len(),
            ..ImportSummary::default()
        };
        for (index, row) in rows.iter().enumerate() {
            match self.processor.process(row).await {
                Ok(outcome) => summary.record(outcome),
                Err(err) => {
                    tracing::warn!(row = index.saturating_add(1), error = %err, "import row failed");
                    summary.record_error();
                }
            }
        }
        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            errors = summary.errors,
            total = summary.total,
            "import finished"
        );
        summary
    }

    /// Runs an import inside `session`.
    ///
    /// Unreadable input completes the session with
    /// [`ImportSummary::read_failure`].
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Session`] when `session` is already running.
    pub async fn run(
        &self,
        session: &mut ImportSession,
        rows: Result<Vec<ImportRow>, ImportError>,
    ) -> Result<ImportSummary, ImportError> {
        session.start()?;
        let summary = match rows {
            Ok(read) => self.import(&read).await,
            Err(err) => {
                tracing::warn!(error = %err, "import input could not be read");
                ImportSummary::read_failure()
            }
        };
        session.finish(summary)?;
        Ok(summary)
    }
}
