//! Customer repository: create + list.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CreatePartyInput, Customer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer and returns it with generated fields.
    pub async fn create(&self, input: &CreatePartyInput) -> DbResult<Customer> {
        let now = Utc::now();

        debug!(name = %input.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone, address, created_at)
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

        Ok(Customer {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            created_at: now,
        })
    }

    /// Lists all customers in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, created_at
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_create_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let created = repo
            .create(&CreatePartyInput {
                name: "ACME Corp".to_string(),
                email: Some("billing@acme.example".to_string()),
                phone: None,
                address: Some("1 Roadrunner Way".to_string()),
            })
            .await
            .unwrap();
        assert!(created.id > 0);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].email.as_deref(), Some("billing@acme.example"));
        assert!(listed[0].phone.is_none());
    }
}
