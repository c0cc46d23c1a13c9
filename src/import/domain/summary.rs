//! Per-row outcomes and batch summaries.

use serde::{Deserialize, Serialize};

/// What processing one row did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    /// A new record was created.
    pub created: bool,
    /// An existing record was updated.
    pub updated: bool,
}

impl RowOutcome {
    /// Outcome of a created record.
    #[must_use]
    pub const fn created() -> Self {
        Self {
            created: true,
            updated: false,
        }
    }

    /// Outcome of an updated record.
    #[must_use]
    pub const fn updated() -> Self {
        Self {
            created: false,
            updated: true,
        }
    }
}

/// Counts reported at the end of an import.
///
/// `created + updated + errors` never exceeds `total` except for
/// [`ImportSummary::read_failure`], where the input could not be read at
/// all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Rows that created a record.
    pub created: usize,
    /// Rows that updated a record.
    pub updated: usize,
    /// Rows that failed.
    pub errors: usize,
    /// Rows read from the input.
    pub total: usize,
}

impl ImportSummary {
    /// Summary for input that could not be read.
    #[must_use]
    pub const fn read_failure() -> Self {
        Self {
            created: 0,
            updated: 0,
            errors: 1,
            total: 0,
        }
    }

    /// Counts one processed row. Created wins when both flags are set.
    pub const fn record(&mut self, outcome: RowOutcome) {
        if outcome.created {
            self.created = self.created.saturating_add(1);
        } else if outcome.updated {
            self.updated = self.updated.saturating_add(1);
        }
    }

    /// Counts one failed row.
    pub const fn record_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }

    /// Returns whether every row succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors == 0
    }
}
