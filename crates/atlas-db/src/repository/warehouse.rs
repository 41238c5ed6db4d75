//! Warehouse repository: create + list. Warehouses are never updated or
//! deleted through the RPC surface.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CreateWarehouseInput, Warehouse};

/// Repository for warehouse database operations.
#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    pool: SqlitePool,
}

impl WarehouseRepository {
    /// Creates a new WarehouseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WarehouseRepository { pool }
    }

    /// Inserts a new warehouse and returns it with generated fields.
    pub async fn create(&self, input: &CreateWarehouseInput) -> DbResult<Warehouse> {
        let now = Utc::now();

        debug!(name = %input.name, "Inserting warehouse");

        let result = sqlx::query(
            r#"
            INSERT INTO warehouses (name, location, description, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.description.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Warehouse {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            location: input.location.clone(),
            description: input.description.clone(),
            created_at: now,
        })
    }

    /// Lists all warehouses in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, name, location, description, created_at
            FROM warehouses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(warehouses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_generated_fields() {
        let db = test_db().await;

        let created = db
            .warehouses()
            .create(&CreateWarehouseInput {
                name: "Main Warehouse".to_string(),
                location: "Springfield".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "Main Warehouse");
        assert!(created.description.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let db = test_db().await;
        let repo = db.warehouses();

        for name in ["North", "South", "East"] {
            repo.create(&CreateWarehouseInput {
                name: name.to_string(),
                location: "somewhere".to_string(),
                description: Some(format!("{name} dock")),
            })
            .await
            .unwrap();
        }

        let listed = repo.list().await.unwrap();
        let names: Vec<_> = listed.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["North", "South", "East"]);
        assert_eq!(listed[0].description.as_deref(), Some("North dock"));
    }
}
