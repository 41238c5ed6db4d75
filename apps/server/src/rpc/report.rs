//! Reporting procedures.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::FinancialSummary;

/// `getFinancialSummary() -> {totalIncome, totalExpenses, netProfit, pendingInvoices, overdueInvoices}`
pub async fn get_financial_summary(
    State(state): State<AppState>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let summary = state.db.reports().financial_summary().await?;
    Ok(Json(summary))
}
