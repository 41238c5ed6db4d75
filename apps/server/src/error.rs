//! # API Errors
//!
//! What a failed procedure looks like from the client's side: a status code
//! plus `{ "code": ..., "message": ... }`.
//!
//! ```text
//!   ValidationError                        → 400 VALIDATION_ERROR
//!   DbError::NotFound                      → 404 NOT_FOUND
//!   DbError::Unique/ForeignKeyViolation    → 409 CONSTRAINT_VIOLATION
//!   any other DbError                      → 500 DATABASE_ERROR
//! ```
//!
//! The 500 bucket keeps engine details out of responses; the specifics land
//! in the log instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use atlas_core::ValidationError;
use atlas_db::DbError;

/// API error returned from RPC handlers.
///
/// ## Serialization
/// This is what the frontend receives when a procedure fails:
/// ```json
/// {
///   "code": "CONSTRAINT_VIOLATION",
///   "message": "Duplicate products.sku: value already exists"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced entity does not exist (404)
    NotFound,

    /// Input failed schema validation, storage never touched (400)
    ValidationError,

    /// Storage rejected the write: duplicate unique key or dangling
    /// foreign key (409)
    ConstraintViolation,

    /// Unexpected persistence failure (500)
    DatabaseError,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::ConstraintViolation => StatusCode::CONFLICT,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. } => {
                ApiError::new(ErrorCode::ConstraintViolation, err.to_string())
            }
            DbError::ConnectionFailed(_)
            | DbError::MigrationFailed(_)
            | DbError::PoolExhausted => {
                tracing::error!(error = %err, "Database unavailable");
                ApiError::new(ErrorCode::DatabaseError, "Database unavailable")
            }
            DbError::QueryFailed(e) | DbError::TransactionFailed(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %e, "Database operation failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Renders the error as an HTTP response with the matching status code.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ConstraintViolation.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::DatabaseError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_constraint_violations_map_to_conflict() {
        let err: ApiError = DbError::UniqueViolation {
            field: "products.sku".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ConstraintViolation);
    }
}
