//! Shared Diesel error mapping for the registrar's adapters.
//!
//! Driver messages are kept verbatim; the domain surfaces them to clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{RegistrationStoreError, RepositoryError};

use super::pool::PoolError;

/// Coarse failure categories shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// The connection is gone or could not be used.
    Connection,
    /// A foreign key rejected the statement.
    ForeignKey,
    /// The store rejected the statement for any other reason.
    Rejected,
    /// A failure outside the database (query building, deserialisation).
    Other,
}

/// Log and classify a Diesel error, returning its verbatim message.
pub(crate) fn classify(error: DieselError) -> (FailureKind, String) {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(kind, info) => {
            let category = match kind {
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                    FailureKind::Connection
                }
                DatabaseErrorKind::ForeignKeyViolation => FailureKind::ForeignKey,
                _ => FailureKind::Rejected,
            };
            (category, info.message().to_owned())
        }
        broken @ DieselError::BrokenTransactionManager => {
            (FailureKind::Connection, broken.to_string())
        }
        other => (FailureKind::Other, other.to_string()),
    }
}

/// Map pool errors into a repository connection error.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map errors from inserts, reads, and updates.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match classify(error) {
        (FailureKind::Connection, message) => RepositoryError::connection(message),
        (FailureKind::ForeignKey | FailureKind::Rejected, message) => {
            RepositoryError::constraint(message)
        }
        (FailureKind::Other, message) => RepositoryError::query(message),
    }
}

/// Map errors from deletes, where a foreign key means the row is still
/// referenced.
pub(crate) fn map_delete_error(error: DieselError) -> RepositoryError {
    match classify(error) {
        (FailureKind::ForeignKey, message) => RepositoryError::referenced(message),
        (FailureKind::Connection, message) => RepositoryError::connection(message),
        (FailureKind::Rejected, message) => RepositoryError::constraint(message),
        (FailureKind::Other, message) => RepositoryError::query(message),
    }
}

/// Map a statement failure inside a registration transaction.
pub(crate) fn map_statement_error(error: DieselError) -> RegistrationStoreError {
    let (_, message) = classify(error);
    RegistrationStoreError::constraint_violation(message)
}
