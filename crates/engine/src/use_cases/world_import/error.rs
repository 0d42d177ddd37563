//! World import error types.

use std::path::PathBuf;

use crate::infrastructure::importers::{EntityKind, ParseErrors, ValidationError};
use crate::infrastructure::ports::RepoError;

/// Why a file was not fully imported.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid world file: {0}")]
    Parse(#[from] ParseErrors),

    /// Nothing from the file was written.
    #[error("Core import failed: {0}")]
    Core(#[source] RepoError),

    /// Core entities are committed; secondary writes stopped.
    #[error("Secondary import failed: {0}")]
    Secondary(#[source] RepoError),
}

impl ImportError {
    /// The error as report entries.
    pub fn to_validation_errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Parse(errors) => errors.errors().to_vec(),
            Self::Io { .. } => vec![ValidationError::for_kind(EntityKind::File, self.to_string())],
            Self::Core(_) | Self::Secondary(_) => vec![ValidationError::new(self.to_string())],
        }
    }
}
