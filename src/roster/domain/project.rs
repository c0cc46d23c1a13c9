//! Project reference records.

use super::{ProjectId, RosterDomainError};
use serde::{Deserialize, Serialize};

/// A project tasks belong to. Only joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
}

impl Project {
    /// Creates a project with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, RosterDomainError> {
        Self::with_id(ProjectId::new(), name)
    }

    /// Creates a project with a known identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyProjectName`] when the name is blank.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterDomainError::EmptyProjectName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
