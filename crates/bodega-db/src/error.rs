//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                          │
//! │                                                                 │
//! │  SQLite error (sqlx::Error)                                     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  DbError (this module) ← categorized by constraint type         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Console shows a one-line failure message                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate ids and check-constraint rejections are distinct variants on
//! purpose: the caller can tell "that id is taken" apart from "the store
//! refused the value".

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No product with this id exists.
    ///
    /// ## When This Occurs
    /// - `remove`, `set_quantity`, or `set_price` with an absent id
    #[error("product not found: {id}")]
    NotFound { id: i64 },

    /// A product with this id already exists.
    ///
    /// ## When This Occurs
    /// - `add` with an id already present in the mirror
    #[error("duplicate product id: {id}")]
    DuplicateId { id: i64 },

    /// The store rejected a write (CHECK or UNIQUE constraint).
    ///
    /// ## When This Occurs
    /// - Negative quantity/price reaching the store layer
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue, disk full
    ///
    /// Fatal: there is no retry policy, the caller gives up.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for the given product id.
    pub fn not_found(id: i64) -> Self {
        DbError::NotFound { id }
    }

    /// Creates a DuplicateId error for the given product id.
    pub fn duplicate(id: i64) -> Self {
        DbError::DuplicateId { id }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database + "CHECK constraint failed"  → ConstraintViolation
/// sqlx::Error::Database + "UNIQUE constraint failed" → ConstraintViolation
/// sqlx::Error::Database (other)                      → QueryFailed
/// sqlx::Error::PoolClosed                            → ConnectionFailed
/// Other                                              → Internal
/// ```
///
/// A UNIQUE violation here means a writer bypassed the mirror's existence
/// check, which the repository never does itself; it is reported as a
/// constraint violation rather than a duplicate id because the id is not
/// recoverable from the SQLite message.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite phrasing:
                // "CHECK constraint failed: <expr>"
                // "UNIQUE constraint failed: <table>.<column>"
                if msg.contains("CHECK constraint failed")
                    || msg.contains("UNIQUE constraint failed")
                {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DbError::not_found(7).to_string(), "product not found: 7");
        assert_eq!(
            DbError::duplicate(101).to_string(),
            "duplicate product id: 101"
        );
    }
}
