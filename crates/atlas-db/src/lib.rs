//! # atlas-db
//!
//! SQLite persistence for Atlas SMB: a pooled [`Database`] handle, embedded
//! migrations, and one repository per entity family.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Database (pool.rs)                                               │
//! │     ├── warehouses() products() inventory() customers()           │
//! │     ├── suppliers() orders() invoices() expenses()                │
//! │     └── transactions() reports()                                  │
//! │                                                                   │
//! │  Each repository owns the SQL for its tables. Derived fields      │
//! │  (order totals, invoice totals) are written in exactly one place  │
//! │  each, so there is a single writer to audit per invariant.        │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust,ignore
//! let db = Database::new(DbConfig::new("./data/atlas.db")).await?;
//! let product = db.products().create(&input).await?;
//! let summary = db.reports().financial_summary().await?;
//! ```

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
pub use repository::expense::ExpenseRepository;
pub use repository::inventory::InventoryRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
pub use repository::supplier::SupplierRepository;
pub use repository::transaction::TransactionRepository;
pub use repository::warehouse::WarehouseRepository;
