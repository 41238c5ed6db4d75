//! Transaction (ledger entry) repository: create + newest-first listing.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{CreateTransactionInput, Transaction};

/// Repository for ledger transaction database operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Inserts a new transaction. `transaction_date` defaults to now.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - invoice_id or expense_id doesn't exist
    pub async fn create(&self, input: &CreateTransactionInput) -> DbResult<Transaction> {
        let now = Utc::now();
        let transaction_date = input.transaction_date.unwrap_or(now);

        debug!(
            transaction_type = ?input.transaction_type,
            amount = %input.amount,
            "Inserting transaction"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO transactions (
                transaction_type, amount_cents, description,
                invoice_id, expense_id, transaction_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(input.transaction_type)
        .bind(input.amount)
        .bind(&input.description)
        .bind(input.invoice_id)
        .bind(input.expense_id)
        .bind(transaction_date)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Transaction {
            id: result.last_insert_rowid(),
            transaction_type: input.transaction_type,
            amount: input.amount,
            description: input.description.clone(),
            invoice_id: input.invoice_id,
            expense_id: input.expense_id,
            transaction_date,
            created_at: now,
        })
    }

    /// Lists all transactions, newest created first.
    ///
    /// The id tiebreak keeps the order stable when two rows land inside the
    /// same timestamp precision.
    pub async fn list(&self) -> DbResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT
                id,
                transaction_type,
                amount_cents AS amount,
                description,
                invoice_id,
                expense_id,
                transaction_date,
                created_at
            FROM transactions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use atlas_core::TransactionType;

    fn entry(description: &str, amount: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            transaction_type: TransactionType::Income,
            amount: amount.parse().unwrap(),
            description: description.to_string(),
            invoice_id: None,
            expense_id: None,
            transaction_date: None,
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.transactions();

        repo.create(&entry("first", "10.00")).await.unwrap();
        repo.create(&entry("second", "20.00")).await.unwrap();
        repo.create(&entry("third", "30.00")).await.unwrap();

        let listed = repo.list().await.unwrap();
        let descriptions: Vec<_> = listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_dangling_invoice_reference_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut input = entry("payment", "10.00");
        input.invoice_id = Some(999);
        let err = db.transactions().create(&input).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
