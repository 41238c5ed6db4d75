//! # Inventory Repository
//!
//! Stock levels per (product, warehouse) pair, maintained by upsert.
//!
//! ## Upsert Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  updateInventory(product_id, warehouse_id, quantity, reorder_level?)   │
//! │                                                                         │
//! │  1. Product exists?   ──no──► NotFound("Product")                      │
//! │  2. Warehouse exists? ──no──► NotFound("Warehouse")                    │
//! │  3. INSERT .. ON CONFLICT (product_id, warehouse_id) DO UPDATE         │
//! │                                                                         │
//! │     reorder_level supplied:  quantity + reorder_level both written     │
//! │     reorder_level omitted:   quantity written, stored level UNTOUCHED  │
//! │                              (new rows default to 10)                  │
//! │                                                                         │
//! │  The conditional write makes the racy "select then insert-or-update"   │
//! │  a single atomic statement: two concurrent callers on the same pair    │
//! │  can never produce two rows.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use atlas_core::{Inventory, UpdateInventoryInput, DEFAULT_REORDER_LEVEL};

/// Repository for inventory database operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Upserts the stock row for `(product_id, warehouse_id)` and returns
    /// the resulting row.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - product or warehouse id does not exist
    pub async fn upsert(&self, input: &UpdateInventoryInput) -> DbResult<Inventory> {
        if !self.row_exists("products", input.product_id).await? {
            return Err(DbError::not_found("Product", input.product_id));
        }
        if !self.row_exists("warehouses", input.warehouse_id).await? {
            return Err(DbError::not_found("Warehouse", input.warehouse_id));
        }

        let now = Utc::now();

        debug!(
            product_id = input.product_id,
            warehouse_id = input.warehouse_id,
            quantity = input.quantity,
            "Upserting inventory"
        );

        // Two statement variants so an omitted reorder_level genuinely
        // leaves the stored value alone on update.
        match input.reorder_level {
            Some(level) => {
                sqlx::query(
                    r#"
                    INSERT INTO inventory (product_id, warehouse_id, quantity, reorder_level, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ON CONFLICT (product_id, warehouse_id) DO UPDATE SET
                        quantity = excluded.quantity,
                        reorder_level = excluded.reorder_level,
                        updated_at = excluded.updated_at
                    "#,
                )
                .bind(input.product_id)
                .bind(input.warehouse_id)
                .bind(input.quantity)
                .bind(level)
                .bind(now)
                .execute(&self.pool)
                .await?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO inventory (product_id, warehouse_id, quantity, reorder_level, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ON CONFLICT (product_id, warehouse_id) DO UPDATE SET
                        quantity = excluded.quantity,
                        updated_at = excluded.updated_at
                    "#,
                )
                .bind(input.product_id)
                .bind(input.warehouse_id)
                .bind(input.quantity)
                .bind(DEFAULT_REORDER_LEVEL)
                .bind(now)
                .execute(&self.pool)
                .await?;
            }
        }

        let row = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, warehouse_id, quantity, reorder_level, updated_at
            FROM inventory
            WHERE product_id = ?1 AND warehouse_id = ?2
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists all inventory rows in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Inventory>> {
        let rows = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, warehouse_id, quantity, reorder_level, updated_at
            FROM inventory
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists rows whose quantity fell strictly below the reorder level.
    ///
    /// Strictly: a row sitting exactly at its reorder level is NOT low stock.
    pub async fn low_stock(&self) -> DbResult<Vec<Inventory>> {
        let rows = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, warehouse_id, quantity, reorder_level, updated_at
            FROM inventory
            WHERE quantity < reorder_level
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // Existence probe used by the upsert pre-checks. `table` is an internal
    // constant, never caller data.
    async fn row_exists(&self, table: &str, id: i64) -> DbResult<bool> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)");
        let exists: bool = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
