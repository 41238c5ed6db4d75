//! Customer procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreatePartyInput, Customer};

/// `createCustomer(name, email?, phone?, address?) -> Customer`
pub async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CreatePartyInput>,
) -> Result<Json<Customer>, ApiError> {
    debug!(name = %input.name, "createCustomer");
    input.validate()?;
    let customer = state.db.customers().create(&input).await?;
    Ok(Json(customer))
}

/// `getCustomers() -> Customer[]`
pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.db.customers().list().await?;
    Ok(Json(customers))
}
