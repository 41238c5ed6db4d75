//! Ledger transaction procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreateTransactionInput, Transaction};

/// `createTransaction(type, amount>0, description, invoice_id?, expense_id?, transaction_date?) -> Transaction`
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<CreateTransactionInput>,
) -> Result<Json<Transaction>, ApiError> {
    debug!(transaction_type = ?input.transaction_type, "createTransaction");
    input.validate()?;
    let transaction = state.db.transactions().create(&input).await?;
    Ok(Json(transaction))
}

/// `getTransactions() -> Transaction[]`: newest created first.
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.db.transactions().list().await?;
    Ok(Json(transactions))
}
