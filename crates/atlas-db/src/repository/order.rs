//! # Order Repository
//!
//! Database operations for orders and order items.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create() → Order { status: pending, total_amount: 0.00 }       │
//! │                     order_number generated, retried on collision       │
//! │                                                                         │
//! │  2. ADD ITEMS (one transaction per item)                               │
//! │     └── add_item()                                                     │
//! │         ├── INSERT order_items (total_price = qty × unit_price)        │
//! │         ├── SUM(total_price) over ALL the order's items                │
//! │         └── UPDATE orders.total_amount ← that sum                      │
//! │                                                                         │
//! │  The recompute is deliberately full, not incremental: re-deriving      │
//! │  from every row is correct no matter what the stored total says,       │
//! │  and item counts per order are small. Running insert + recompute +     │
//! │  write inside one transaction means no reader ever observes the new    │
//! │  item alongside the stale total.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{generate_number, NUMBER_ATTEMPTS};
use atlas_core::{
    CreateOrderInput, CreateOrderItemInput, Money, Order, OrderItem, OrderStatus,
};

/// Prefix for generated order numbers.
const ORDER_NUMBER_PREFIX: &str = "ORD";

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates a new order with a generated order number.
    ///
    /// The order starts `pending` with a zero total (no items yet).
    /// `order_date` defaults to now when omitted. A generated-number
    /// collision (unique constraint) regenerates and retries a bounded
    /// number of times before surfacing.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - customer/supplier id doesn't exist
    /// * `DbError::UniqueViolation` - number collided on every attempt
    pub async fn create(&self, input: &CreateOrderInput) -> DbResult<Order> {
        let order_date = input.order_date.unwrap_or_else(Utc::now);

        let mut attempt = 1;
        loop {
            let order_number = generate_number(ORDER_NUMBER_PREFIX);
            match self.insert_order(input, &order_number, order_date).await {
                Err(DbError::UniqueViolation { ref field })
                    if field.ends_with("order_number") && attempt < NUMBER_ATTEMPTS =>
                {
                    debug!(attempt, %order_number, "Order number collision, regenerating");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn insert_order(
        &self,
        input: &CreateOrderInput,
        order_number: &str,
        order_date: DateTime<Utc>,
    ) -> DbResult<Order> {
        let now = Utc::now();
        let status = OrderStatus::default();

        debug!(%order_number, order_type = ?input.order_type, "Inserting order");

        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                order_number, order_type, customer_id, supplier_id,
                status, total_amount_cents, order_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(order_number)
        .bind(input.order_type)
        .bind(input.customer_id)
        .bind(input.supplier_id)
        .bind(status)
        .bind(Money::zero())
        .bind(order_date)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Order {
            id: result.last_insert_rowid(),
            order_number: order_number.to_string(),
            order_type: input.order_type,
            customer_id: input.customer_id,
            supplier_id: input.supplier_id,
            status,
            total_amount: Money::zero(),
            order_date,
            created_at: now,
        })
    }

    /// Gets an order by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT
                id,
                order_number,
                order_type,
                customer_id,
                supplier_id,
                status,
                total_amount_cents AS total_amount,
                order_date,
                created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists all orders in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT
                id,
                order_number,
                order_type,
                customer_id,
                supplier_id,
                status,
                total_amount_cents AS total_amount,
                order_date,
                created_at
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Adds an item to an order and rewrites the order's derived total.
    ///
    /// Runs as one transaction: item insert, full `SUM` over the order's
    /// items, total write. After commit `orders.total_amount` equals the
    /// exact sum of `total_price` over all items.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - order_id or product_id doesn't exist
    pub async fn add_item(&self, input: &CreateOrderItemInput) -> DbResult<OrderItem> {
        let total_price = input.unit_price.multiply_quantity(input.quantity);

        debug!(
            order_id = input.order_id,
            product_id = input.product_id,
            quantity = input.quantity,
            "Adding order item"
        );

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, unit_price_cents, total_price_cents)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(input.order_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(total_price)
        .execute(&mut *tx)
        .await?;
        let id = inserted.last_insert_rowid();

        let order_total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_price_cents), 0) FROM order_items WHERE order_id = ?1",
        )
        .bind(input.order_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE orders SET total_amount_cents = ?2 WHERE id = ?1")
            .bind(input.order_id)
            .bind(order_total)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(OrderItem {
            id,
            order_id: input.order_id,
            product_id: input.product_id,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total_price,
        })
    }

    /// Gets all items for an order, oldest first.
    pub async fn items(&self, order_id: i64) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT
                id,
                order_id,
                product_id,
                quantity,
                unit_price_cents AS unit_price,
                total_price_cents AS total_price
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use atlas_core::{CreatePartyInput, CreateProductInput, OrderType};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_sales_order(db: &Database) -> (i64, i64) {
        let customer = db
            .customers()
            .create(&CreatePartyInput {
                name: "ACME".to_string(),
                email: None,
                phone: None,
                address: None,
            })
            .await
            .unwrap();
        let product = db
            .products()
            .create(&CreateProductInput {
                name: "Widget".to_string(),
                description: None,
                sku: "WID-001".to_string(),
                price: "19.99".parse().unwrap(),
                cost: "12.50".parse().unwrap(),
            })
            .await
            .unwrap();
        let order = db
            .orders()
            .create(&CreateOrderInput {
                order_type: OrderType::Sales,
                customer_id: Some(customer.id),
                supplier_id: None,
                order_date: None,
            })
            .await
            .unwrap();
        (order.id, product.id)
    }

    #[tokio::test]
    async fn test_create_starts_pending_with_zero_total() {
        let db = test_db().await;
        let (order_id, _) = seed_sales_order(&db).await;

        let order = db.orders().get(order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.total_amount.is_zero());
        assert!(order.order_number.starts_with("ORD-"));
    }

    #[tokio::test]
    async fn test_order_numbers_are_unique_across_creations() {
        let db = test_db().await;
        let customer = db
            .customers()
            .create(&CreatePartyInput {
                name: "ACME".to_string(),
                email: None,
                phone: None,
                address: None,
            })
            .await
            .unwrap();

        let mut numbers = Vec::new();
        for _ in 0..5 {
            let order = db
                .orders()
                .create(&CreateOrderInput {
                    order_type: OrderType::Sales,
                    customer_id: Some(customer.id),
                    supplier_id: None,
                    order_date: None,
                })
                .await
                .unwrap();
            numbers.push(order.order_number);
        }
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_customer_is_a_foreign_key_violation() {
        let db = test_db().await;

        let err = db
            .orders()
            .create(&CreateOrderInput {
                order_type: OrderType::Sales,
                customer_id: Some(999),
                supplier_id: None,
                order_date: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_add_item_recomputes_total_after_each_insert() {
        let db = test_db().await;
        let (order_id, product_id) = seed_sales_order(&db).await;
        let repo = db.orders();

        // Item A: qty 2 @ 19.99 → 39.98
        let a = repo
            .add_item(&CreateOrderItemInput {
                order_id,
                product_id,
                quantity: 2,
                unit_price: "19.99".parse().unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(a.total_price.to_string(), "39.98");

        let order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.total_amount.to_string(), "39.98");

        // Item B: qty 1 @ 10.00 → order total 49.98
        repo.add_item(&CreateOrderItemInput {
            order_id,
            product_id,
            quantity: 1,
            unit_price: "10.00".parse().unwrap(),
        })
        .await
        .unwrap();

        let order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.total_amount.to_string(), "49.98");

        let items = repo.items(order_id).await.unwrap();
        assert_eq!(items.len(), 2);
        let item_sum: Money = items.iter().map(|i| i.total_price).sum();
        assert_eq!(item_sum, order.total_amount);
    }

    #[tokio::test]
    async fn test_add_item_against_missing_order_is_rejected() {
        let db = test_db().await;
        let (_, product_id) = seed_sales_order(&db).await;

        let err = db
            .orders()
            .add_item(&CreateOrderItemInput {
                order_id: 999,
                product_id,
                quantity: 1,
                unit_price: "1.00".parse().unwrap(),
            })
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());

        // Nothing was persisted by the failed transaction
        assert!(db.orders().items(999).await.unwrap().is_empty());
    }
}
