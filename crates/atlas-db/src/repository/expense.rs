//! Expense repository: create, list, and the by-category aggregation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CategoryTotal, CreateExpenseInput, Expense};

/// Repository for expense database operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseRepository { pool }
    }

    /// Inserts a new expense. `expense_date` defaults to now when omitted.
    pub async fn create(&self, input: &CreateExpenseInput) -> DbResult<Expense> {
        let now = Utc::now();
        let expense_date = input.expense_date.unwrap_or(now);

        debug!(category = %input.category, amount = %input.amount, "Inserting expense");

        let result = sqlx::query(
            r#"
            INSERT INTO expenses (description, amount_cents, category, expense_date, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.category)
        .bind(expense_date)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Expense {
            id: result.last_insert_rowid(),
            description: input.description.clone(),
            amount: input.amount,
            category: input.category.clone(),
            expense_date,
            created_at: now,
        })
    }

    /// Lists all expenses in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT
                id,
                description,
                amount_cents AS amount,
                category,
                expense_date,
                created_at
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Sums expenses per category (exact, case-sensitive string grouping).
    pub async fn totals_by_category(&self) -> DbResult<Vec<CategoryTotal>> {
        let totals = sqlx::query_as::<_, CategoryTotal>(
            r#"
            SELECT category, COALESCE(SUM(amount_cents), 0) AS total
            FROM expenses
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use atlas_core::Money;

    fn expense(category: &str, amount: &str) -> CreateExpenseInput {
        CreateExpenseInput {
            description: format!("{category} spend"),
            amount: amount.parse().unwrap(),
            category: category.to_string(),
            expense_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_expense_date() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let created = db
            .expenses()
            .create(&expense("Office", "100.50"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.expense_date, created.created_at);
    }

    #[tokio::test]
    async fn test_totals_group_by_exact_category() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.expenses();

        repo.create(&expense("Office", "100.50")).await.unwrap();
        repo.create(&expense("Office", "75.25")).await.unwrap();
        repo.create(&expense("Marketing", "250.75")).await.unwrap();

        let totals = repo.totals_by_category().await.unwrap();
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Marketing".to_string(),
                    total: Money::from_cents(25075),
                },
                CategoryTotal {
                    category: "Office".to_string(),
                    total: Money::from_cents(17575),
                },
            ]
        );
    }
}
