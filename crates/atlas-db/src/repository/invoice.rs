//! # Invoice Repository
//!
//! Database operations for invoices.
//!
//! `total_amount` is derived once at creation (`amount + tax_amount`) and
//! stored immutably; nothing ever recomputes it. "Overdue" exists twice on
//! purpose: [`InvoiceRepository::overdue`] compares `due_date` against the
//! clock, while the financial summary trusts the stored `payment_status`
//! flag. No job reconciles the two.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{generate_number, NUMBER_ATTEMPTS};
use atlas_core::{CreateInvoiceInput, Invoice, PaymentStatus};

/// Prefix for generated invoice numbers.
const INVOICE_NUMBER_PREFIX: &str = "INV";

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Creates a new invoice with a generated invoice number.
    ///
    /// `total_amount = amount + tax_amount`, `payment_status` starts
    /// `pending`, `issue_date` defaults to now. Number collisions
    /// regenerate and retry, bounded.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - customer_id or order_id doesn't exist
    pub async fn create(&self, input: &CreateInvoiceInput) -> DbResult<Invoice> {
        let issue_date = input.issue_date.unwrap_or_else(Utc::now);

        let mut attempt = 1;
        loop {
            let invoice_number = generate_number(INVOICE_NUMBER_PREFIX);
            match self.insert_invoice(input, &invoice_number, issue_date).await {
                Err(DbError::UniqueViolation { ref field })
                    if field.ends_with("invoice_number") && attempt < NUMBER_ATTEMPTS =>
                {
                    debug!(attempt, %invoice_number, "Invoice number collision, regenerating");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn insert_invoice(
        &self,
        input: &CreateInvoiceInput,
        invoice_number: &str,
        issue_date: DateTime<Utc>,
    ) -> DbResult<Invoice> {
        let now = Utc::now();
        let total_amount = input.amount + input.tax_amount;
        let payment_status = PaymentStatus::default();

        debug!(%invoice_number, customer_id = input.customer_id, "Inserting invoice");

        let result = sqlx::query(
            r#"
            INSERT INTO invoices (
                invoice_number, order_id, customer_id,
                amount_cents, tax_amount_cents, total_amount_cents,
                payment_status, issue_date, due_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(invoice_number)
        .bind(input.order_id)
        .bind(input.customer_id)
        .bind(input.amount)
        .bind(input.tax_amount)
        .bind(total_amount)
        .bind(payment_status)
        .bind(issue_date)
        .bind(input.due_date)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Invoice {
            id: result.last_insert_rowid(),
            invoice_number: invoice_number.to_string(),
            order_id: input.order_id,
            customer_id: input.customer_id,
            amount: input.amount,
            tax_amount: input.tax_amount,
            total_amount,
            payment_status,
            issue_date,
            due_date: input.due_date,
            created_at: now,
        })
    }

    /// Lists all invoices in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT
                id,
                invoice_number,
                order_id,
                customer_id,
                amount_cents AS amount,
                tax_amount_cents AS tax_amount,
                total_amount_cents AS total_amount,
                payment_status,
                issue_date,
                due_date,
                created_at
            FROM invoices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    /// Lists invoices past their due date that are not paid.
    ///
    /// Criterion: `due_date < now AND payment_status != 'paid'`. The stored
    /// `overdue` status flag plays no part here.
    pub async fn overdue(&self) -> DbResult<Vec<Invoice>> {
        let now = Utc::now();

        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT
                id,
                invoice_number,
                order_id,
                customer_id,
                amount_cents AS amount,
                tax_amount_cents AS tax_amount,
                total_amount_cents AS total_amount,
                payment_status,
                issue_date,
                due_date,
                created_at
            FROM invoices
            WHERE due_date < ?1 AND payment_status != ?2
            ORDER BY id
            "#,
        )
        .bind(now)
        .bind(PaymentStatus::Paid)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }
}
