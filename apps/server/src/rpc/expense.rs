//! Expense procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CategoryTotal, CreateExpenseInput, Expense};

/// `createExpense(description, amount>0, category, expense_date?) -> Expense`
pub async fn create_expense(
    State(state): State<AppState>,
    Json(input): Json<CreateExpenseInput>,
) -> Result<Json<Expense>, ApiError> {
    debug!(category = %input.category, "createExpense");
    input.validate()?;
    let expense = state.db.expenses().create(&input).await?;
    Ok(Json(expense))
}

/// `getExpenses() -> Expense[]`
pub async fn get_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.db.expenses().list().await?;
    Ok(Json(expenses))
}

/// `getExpensesByCategory() -> {category, total}[]`
pub async fn get_expenses_by_category(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryTotal>>, ApiError> {
    let totals = state.db.expenses().totals_by_category().await?;
    Ok(Json(totals))
}
