//! Order procedures.
//!
//! `createOrderItem` is the one mutation with a derived side effect: after
//! the item lands, the parent order's `total_amount` is recomputed from all
//! of its items inside the same storage transaction.

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use atlas_core::{CreateOrderInput, CreateOrderItemInput, Order, OrderItem};

/// `createOrder(type, customer_id?, supplier_id?, order_date?) -> Order`
///
/// The party invariant is enforced here, not trusted from the client:
/// sales ⇒ customer only, purchase ⇒ supplier only.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> Result<Json<Order>, ApiError> {
    debug!(order_type = ?input.order_type, "createOrder");
    input.validate()?;
    let order = state.db.orders().create(&input).await?;
    Ok(Json(order))
}

/// `getOrders() -> Order[]`
pub async fn get_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.db.orders().list().await?;
    Ok(Json(orders))
}

/// `createOrderItem(order_id, product_id, quantity>0, unit_price>0) -> OrderItem`
///
/// Unknown order or product ids surface as 409 CONSTRAINT_VIOLATION from
/// the storage layer's foreign keys.
pub async fn create_order_item(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderItemInput>,
) -> Result<Json<OrderItem>, ApiError> {
    debug!(order_id = input.order_id, "createOrderItem");
    input.validate()?;
    let item = state.db.orders().add_item(&input).await?;
    Ok(Json(item))
}

/// `getOrderItems(order_id) -> OrderItem[]`
pub async fn get_order_items(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    let items = state.db.orders().items(order_id).await?;
    Ok(Json(items))
}
