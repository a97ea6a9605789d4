//! Typed error for the storage layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on the email column rejected the write.
    #[error("email already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if unique_violation {
            StoreError::DuplicateEmail
        } else {
            StoreError::Database(err)
        }
    }
}
