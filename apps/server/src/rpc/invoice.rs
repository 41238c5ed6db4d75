//! Invoice procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreateInvoiceInput, Invoice};

/// `createInvoice(order_id?, customer_id, amount>0, tax_amount>=0, due_date, issue_date?) -> Invoice`
///
/// `total_amount` is derived (`amount + tax_amount`) and `payment_status`
/// starts `pending`.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoiceInput>,
) -> Result<Json<Invoice>, ApiError> {
    debug!(customer_id = input.customer_id, "createInvoice");
    input.validate()?;
    let invoice = state.db.invoices().create(&input).await?;
    Ok(Json(invoice))
}

/// `getInvoices() -> Invoice[]`
pub async fn get_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = state.db.invoices().list().await?;
    Ok(Json(invoices))
}

/// `getOverdueInvoices() -> Invoice[]`: `due_date < now` and not paid.
pub async fn get_overdue_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = state.db.invoices().overdue().await?;
    Ok(Json(invoices))
}
