//! # Repositories
//!
//! One repository struct per entity family, each a thin wrapper over the
//! shared pool that keeps that family's SQL in a single file. Handlers go
//! `db.products().create(&input)`; nothing outside this module writes SQL
//! against the entity tables.
//!
//! The interesting ones:
//! - [`inventory::InventoryRepository`]: atomic upsert keyed on
//!   (product, warehouse) with a partial-update contract
//! - [`order::OrderRepository`]: item insertion that rewrites the parent
//!   order's derived total in the same transaction
//! - [`invoice::InvoiceRepository`]: generated numbers, date-based overdue
//! - [`report::ReportRepository`]: read-only dashboard aggregations
//!
//! The rest (warehouse, product, customer, supplier, expense, transaction)
//! are plain create/list.

use chrono::Utc;
use uuid::Uuid;

pub mod customer;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod product;
pub mod report;
pub mod supplier;
pub mod transaction;
pub mod warehouse;

/// How many times a generated business number is regenerated after a
/// unique-constraint collision before the violation surfaces.
pub(crate) const NUMBER_ATTEMPTS: u32 = 3;

/// Generates a business number: `<PREFIX>-<unix millis>-<3 random digits>`.
///
/// ## Example
/// `ORD-1754300000000-042`
///
/// Uniqueness is probabilistic, not guaranteed by construction: two calls in
/// the same millisecond can draw the same suffix. The unique constraint on
/// the column is the actual guarantee; callers regenerate and retry on a
/// collision (see [`NUMBER_ATTEMPTS`]).
pub(crate) fn generate_number(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = (Uuid::new_v4().as_u128() % 1000) as u16;
    format!("{prefix}-{millis}-{suffix:03}")
}
