//! Warehouse procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreateWarehouseInput, Warehouse};

/// `createWarehouse(name, location, description?) -> Warehouse`
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouseInput>,
) -> Result<Json<Warehouse>, ApiError> {
    debug!(name = %input.name, "createWarehouse");
    input.validate()?;
    let warehouse = state.db.warehouses().create(&input).await?;
    Ok(Json(warehouse))
}

/// `getWarehouses() -> Warehouse[]`
pub async fn get_warehouses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Warehouse>>, ApiError> {
    let warehouses = state.db.warehouses().list().await?;
    Ok(Json(warehouses))
}
