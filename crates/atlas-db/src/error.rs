//! # Storage Errors
//!
//! `DbError` is the storage layer's whole error surface. Everything sqlx can
//! throw is folded into a handful of categories the RPC layer knows how to
//! present:
//!
//! ```text
//!   NotFound              → the id a handler asked about isn't there (404)
//!   UniqueViolation       → duplicate sku / order_number / invoice_number
//!   ForeignKeyViolation   → dangling order_id, product_id, customer_id, ...
//!   everything else       → unexpected; logged, surfaced generically (500)
//! ```
//!
//! Constraint detection goes through `DatabaseError::kind()` rather than
//! string matching, with the offending column pulled out of SQLite's message
//! where it names one.

use thiserror::Error;

/// Errors produced by the repositories and the pool.
#[derive(Debug, Error)]
pub enum DbError {
    /// A row a handler requires does not exist (e.g. the inventory upsert's
    /// product/warehouse pre-checks).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A UNIQUE constraint fired; `field` is the qualified column from the
    /// engine's message, e.g. `products.sku`.
    #[error("Duplicate {field}: value already exists")]
    UniqueViolation { field: String },

    /// A write referenced a row that isn't there.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// The database file could not be opened or the pool is gone.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Embedded migrations failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// The engine rejected a statement for a non-constraint reason.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A multi-statement transaction could not commit.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Every pooled connection was busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx throws that fits none of the above.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// NotFound for an entity name and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// True for the two storage-rejection variants (duplicate unique key,
    /// dangling foreign key) that the RPC layer reports as conflicts.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. }
        )
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                use sqlx::error::ErrorKind;

                match db_err.kind() {
                    ErrorKind::UniqueViolation => {
                        // SQLite phrases it "UNIQUE constraint failed:
                        // <table>.<column>"; keep the qualified column.
                        let field = db_err
                            .message()
                            .split("UNIQUE constraint failed: ")
                            .nth(1)
                            .unwrap_or("unknown")
                            .to_string();
                        DbError::UniqueViolation { field }
                    }
                    ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation {
                        message: db_err.message().to_string(),
                    },
                    _ => DbError::QueryFailed(db_err.message().to_string()),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result alias used across the crate.
pub type DbResult<T> = Result<T, DbError>;
