//! Supplier procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreatePartyInput, Supplier};

/// `createSupplier(name, email?, phone?, address?) -> Supplier`
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<CreatePartyInput>,
) -> Result<Json<Supplier>, ApiError> {
    debug!(name = %input.name, "createSupplier");
    input.validate()?;
    let supplier = state.db.suppliers().create(&input).await?;
    Ok(Json(supplier))
}

/// `getSuppliers() -> Supplier[]`
pub async fn get_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let suppliers = state.db.suppliers().list().await?;
    Ok(Json(suppliers))
}
