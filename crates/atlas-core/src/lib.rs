//! # atlas-core
//!
//! The I/O-free heart of Atlas SMB: domain types, money arithmetic, and
//! input validation. Everything here is a pure function over plain data:
//! no database handles, no sockets, no clocks beyond accepting timestamps
//! as values.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  single-page client                                                  │
//! │        │  JSON-RPC over HTTP                                         │
//! │        ▼                                                             │
//! │  apps/server ──── deserializes inputs, runs input.validate()         │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  atlas-core  ★   types · money · validation   (THIS CRATE)           │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  atlas-db ─────── persists entities, computes derived fields         │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `sqlx` cargo feature bolts FromRow/Type derives onto the types for
//! atlas-db without dragging sqlx into pure consumers.

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================
// `use atlas_core::Money` instead of `use atlas_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::{Money, MoneyParseError};
pub use types::*;

// =============================================================================
// Constants
// =============================================================================

/// Reorder threshold given to a brand-new inventory row when the caller
/// didn't send one.
///
/// The upsert contract distinguishes "omitted" from "sent": omission leaves
/// an existing row's threshold alone, but a first insert still needs a value
/// for the low-stock report to compare against.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// Cap on free-text fields (names, locations, descriptions, categories).
/// Generous for real data, small enough to keep list views sane.
pub const MAX_TEXT_LEN: usize = 200;
