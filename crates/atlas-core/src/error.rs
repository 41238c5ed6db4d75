//! Validation errors.
//!
//! The error ladder across the workspace is short: inputs fail here with a
//! [`ValidationError`] *before* storage is touched; storage failures are
//! `atlas_db::DbError`; the server folds both into its wire-level `ApiError`.
//! Every variant carries the field name so the client can point at the
//! offending form control.

use thiserror::Error;

/// An RPC input broke a schema rule. Always raised ahead of any storage
/// access, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Missing or blank where a value is mandatory.
    #[error("{field} is required")]
    Required { field: String },

    /// Over the accepted length cap.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Zero or negative where strictly positive is required.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Negative where zero is acceptable.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Shape is wrong (sku charset, email without a domain, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Fields contradict each other, e.g. a sales order carrying a supplier.
    #[error("{field} is inconsistent: {reason}")]
    Conflicting { field: String, reason: String },
}

/// Alias used by every validator in [`crate::validation`].
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
