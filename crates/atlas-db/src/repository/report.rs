//! # Report Repository
//!
//! Read-only aggregations for the dashboard. Nothing here is stored; every
//! call derives fresh numbers from the ledger and invoice tables.
//!
//! ## Financial Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  transactions                          invoices                         │
//! │  ┌──────────────────────┐              ┌──────────────────────┐        │
//! │  │ income   1000.50     │              │ pending   110.55     │        │
//! │  │ expense   300.00     │              │ overdue    80.00     │        │
//! │  └──────────┬───────────┘              └──────────┬───────────┘        │
//! │             │ SUM by type                         │ SUM by status      │
//! │             ▼                                     ▼                    │
//! │  totalIncome / totalExpenses          pendingInvoices /                │
//! │  netProfit = income − expenses        overdueInvoices                  │
//! │                                                                         │
//! │  Invoice buckets read the STORED payment_status; the date-based        │
//! │  overdue query lives on the invoice repository instead.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atlas_core::{FinancialSummary, Money};

/// Repository for read-only financial aggregations.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Computes the financial summary over all transactions and invoices.
    ///
    /// Empty tables yield all-zero fields; sums run in integer cents so the
    /// reported figures are exact.
    pub async fn financial_summary(&self) -> DbResult<FinancialSummary> {
        debug!("Computing financial summary");

        let (income_cents, expense_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN transaction_type = 'income' THEN amount_cents END), 0),
                COALESCE(SUM(CASE WHEN transaction_type = 'expense' THEN amount_cents END), 0)
            FROM transactions
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let (pending_cents, overdue_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN payment_status = 'pending' THEN total_amount_cents END), 0),
                COALESCE(SUM(CASE WHEN payment_status = 'overdue' THEN total_amount_cents END), 0)
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(FinancialSummary {
            total_income: Money::from_cents(income_cents),
            total_expenses: Money::from_cents(expense_cents),
            net_profit: Money::from_cents(income_cents - expense_cents),
            pending_invoices: Money::from_cents(pending_cents),
            overdue_invoices: Money::from_cents(overdue_cents),
        })
    }
}
