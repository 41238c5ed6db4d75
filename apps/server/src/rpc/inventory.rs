//! Inventory procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{Inventory, UpdateInventoryInput};

/// `updateInventory(product_id, warehouse_id, quantity>=0, reorder_level>=0?) -> Inventory`
///
/// Upsert keyed on `(product_id, warehouse_id)`. Unknown product or
/// warehouse ids produce 404 NOT_FOUND before anything is written.
pub async fn update_inventory(
    State(state): State<AppState>,
    Json(input): Json<UpdateInventoryInput>,
) -> Result<Json<Inventory>, ApiError> {
    debug!(
        product_id = input.product_id,
        warehouse_id = input.warehouse_id,
        "updateInventory"
    );
    input.validate()?;
    let row = state.db.inventory().upsert(&input).await?;
    Ok(Json(row))
}

/// `getInventory() -> Inventory[]`
pub async fn get_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<Inventory>>, ApiError> {
    let rows = state.db.inventory().list().await?;
    Ok(Json(rows))
}

/// `getLowStockItems() -> Inventory[]`: quantity strictly below reorder level.
pub async fn get_low_stock_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<Inventory>>, ApiError> {
    let rows = state.db.inventory().low_stock().await?;
    Ok(Json(rows))
}
