//! State of one import run.

use super::{ImportSessionError, ImportSummary};
use std::fmt;

/// Where an import run stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportPhase {
    /// No import has started.
    #[default]
    Idle,
    /// Rows are being processed.
    Running,
    /// The run finished with this summary.
    Completed(ImportSummary),
}

type CompletionCallback = Box<dyn FnMut(&ImportSummary) + Send>;

/// Request-scoped state of an import: phase, summary visibility and an
/// optional completion callback.
///
/// # Examples
///
/// ```
/// use workplan::import::domain::{ImportPhase, ImportSession, ImportSummary};
///
/// let mut session = ImportSession::new();
/// session.start().expect("idle session");
/// assert!(session.is_loading());
/// session.finish(ImportSummary::default()).expect("running session");
/// assert!(session.summary_visible());
/// assert_eq!(session.phase(), ImportPhase::Completed(ImportSummary::default()));
/// ```
#[derive(Default)]
pub struct ImportSession {
    phase: ImportPhase,
    summary_visible: bool,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for ImportSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportSession")
            .field("phase", &self.phase)
            .field("summary_visible", &self.summary_visible)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl ImportSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` every time an import completes.
    #[must_use]
    pub fn with_completion(mut self, callback: impl FnMut(&ImportSummary) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> ImportPhase {
        self.phase
    }

    /// Returns whether rows are being processed.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ImportPhase::Running)
    }

    /// Returns the latest summary, zeroed until a run completes.
    #[must_use]
    pub const fn summary(&self) -> ImportSummary {
        match self.phase {
            ImportPhase::Completed(summary) => summary,
            ImportPhase::Idle | ImportPhase::Running => ImportSummary {
                created: 0,
                updated: 0,
                errors: 0,
                total: 0,
            },
        }
    }

    /// Returns whether the summary should be shown.
    #[must_use]
    pub const fn summary_visible(&self) -> bool {
        self.summary_visible
    }

    /// Hides the summary.
    pub const fn dismiss_summary(&mut self) {
        self.summary_visible = false;
    }

    /// Starts a run, clearing any previous summary.
    ///
    /// # Errors
    ///
    /// Returns [`ImportSessionError::AlreadyRunning`] while a run is in
    /// progress.
    pub const fn start(&mut self) -> Result<(), ImportSessionError> {
        if self.is_loading() {
            return Err(ImportSessionError::AlreadyRunning);
        }
        self.phase = ImportPhase::Running;
        self.summary_visible = false;
        Ok(())
    }

    /// Completes the run, shows the summary and fires the callback.
    ///
    /// # Errors
    ///
    /// Returns [`ImportSessionError::NotRunning`] when no run is in progress.
    pub fn finish(&mut self, summary: ImportSummary) -> Result<(), ImportSessionError> {
        if !self.is_loading() {
            return Err(ImportSessionError::NotRunning);
        }
        self.phase = ImportPhase::Completed(summary);
        self.summary_visible = true;
        if let Some(callback) = self.on_complete.as_mut() {
            callback(&summary);
        }
        Ok(())
    }
}
