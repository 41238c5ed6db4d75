//! # Product Repository
//!
//! Database operations for products.
//!
//! Money columns (`price_cents`, `cost_cents`) are INTEGER cents in storage
//! and surface as [`atlas_core::Money`] on the way out, so a product created
//! with price `19.99` reads back as exactly `19.99`.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CreateProductInput, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product with generated fields
    /// * `Err(DbError::UniqueViolation)` - SKU already exists
    pub async fn create(&self, input: &CreateProductInput) -> DbResult<Product> {
        let now = Utc::now();

        debug!(sku = %input.sku, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, sku, price_cents, cost_cents, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(&input.sku)
        .bind(input.price)
        .bind(input.cost)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            description: input.description.clone(),
            sku: input.sku.clone(),
            price: input.price,
            cost: input.cost,
            created_at: now,
        })
    }

    /// Lists all products in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                name,
                description,
                sku,
                price_cents AS price,
                cost_cents AS cost,
                created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use atlas_core::Money;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn widget(sku: &str) -> CreateProductInput {
        CreateProductInput {
            name: "Widget".to_string(),
            description: Some("A very good widget".to_string()),
            sku: sku.to_string(),
            price: "19.99".parse().unwrap(),
            cost: "12.50".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_money_exactly() {
        let db = test_db().await;

        let created = db.products().create(&widget("WID-001")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.price, Money::from_cents(1999));

        let listed = db.products().list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].price.to_string(), "19.99");
        assert_eq!(listed[0].cost.to_string(), "12.50");
        assert_eq!(listed[0].sku, "WID-001");
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_a_unique_violation() {
        let db = test_db().await;
        let repo = db.products();

        repo.create(&widget("WID-001")).await.unwrap();
        let err = repo.create(&widget("WID-001")).await.unwrap_err();

        match err {
            DbError::UniqueViolation { field } => assert_eq!(field, "products.sku"),
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
    }
}
