//! Product procedures.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreateProductInput, Product};

/// `createProduct(name, description?, sku, price>0, cost>=0) -> Product`
///
/// A duplicate SKU surfaces as a 409 CONSTRAINT_VIOLATION.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> Result<Json<Product>, ApiError> {
    debug!(sku = %input.sku, "createProduct");
    input.validate()?;
    let product = state.db.products().create(&input).await?;
    Ok(Json(product))
}

/// `getProducts() -> Product[]`
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.db.products().list().await?;
    Ok(Json(products))
}
