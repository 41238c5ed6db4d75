//! Supplier repository: create + list. Mirrors the customer repository over
//! its own table; the two roles never share rows.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CreatePartyInput, Supplier};

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Inserts a new supplier and returns it with generated fields.
    pub async fn create(&self, input: &CreatePartyInput) -> DbResult<Supplier> {
        let now = Utc::now();

        debug!(name = %input.name, "Inserting supplier");

        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (name, email, phone, address, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&input.name)
        .bind(input.email.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.address.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Supplier {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            created_at: now,
        })
    }

    /// Lists all suppliers in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, name, email, phone, address, created_at
            FROM suppliers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_suppliers_are_separate_from_customers() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.suppliers()
            .create(&CreatePartyInput {
                name: "Parts Unlimited".to_string(),
                email: None,
                phone: Some("555-0100".to_string()),
                address: None,
            })
            .await
            .unwrap();

        assert_eq!(db.suppliers().list().await.unwrap().len(), 1);
        assert!(db.customers().list().await.unwrap().is_empty());
    }
}
