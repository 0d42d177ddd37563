//! Error types for port operations.

use std::fmt;

use muditor_domain::{MobId, ObjectId, RoomId, ZoneId};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint failed that could not be attributed to a missing dependency.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The transaction was already committed or rolled back.
    #[error("Transaction already finished")]
    TransactionClosed,
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }
}

/// The stored entity a rejected write referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDependency {
    Zone(ZoneId),
    Mob(MobId),
    Room(RoomId),
    Object(ObjectId),
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone(id) => write!(f, "zone {id}"),
            Self::Mob(id) => write!(f, "mob {id}"),
            Self::Room(id) => write!(f, "room {id}"),
            Self::Object(id) => write!(f, "object {id}"),
        }
    }
}

/// Classified outcome of a constraint-prone write.
///
/// `MissingDependency` is the only failure the secondary importer skips;
/// everything else arrives as `Repo` and must be propagated.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("missing {0}")]
    MissingDependency(MissingDependency),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dependency_names_entity_and_id() {
        let err = WriteError::MissingDependency(MissingDependency::Mob(MobId::new(3000)));
        assert_eq!(err.to_string(), "missing mob 3000");
    }

    #[test]
    fn closed_transaction_is_not_a_database_error() {
        let err: WriteError = RepoError::TransactionClosed.into();
        assert_eq!(err.to_string(), "Transaction already finished");
    }

    #[test]
    fn repo_errors_convert_into_write_errors() {
        let err: WriteError = RepoError::database("upsert_shop", "disk I/O error").into();
        assert!(matches!(err, WriteError::Repo(RepoError::Database { .. })));
        assert_eq!(
            err.to_string(),
            "Database error in upsert_shop: disk I/O error"
        );
    }
}
