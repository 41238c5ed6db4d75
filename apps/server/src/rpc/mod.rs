//! # RPC Surface
//!
//! One axum route per procedure, mirroring the names the single-page client
//! calls. Mutations are `POST /rpc/<name>` with a JSON body; reads are
//! `GET /rpc/<name>`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Procedure Map                                     │
//! │                                                                         │
//! │  Warehouses   createWarehouse · getWarehouses                          │
//! │  Products     createProduct · getProducts                              │
//! │  Inventory    updateInventory · getInventory · getLowStockItems        │
//! │  Parties      createCustomer · getCustomers ·                          │
//! │               createSupplier · getSuppliers                            │
//! │  Orders       createOrder · getOrders ·                                │
//! │               createOrderItem · getOrderItems/{order_id}               │
//! │  Invoices     createInvoice · getInvoices · getOverdueInvoices         │
//! │  Expenses     createExpense · getExpenses · getExpensesByCategory      │
//! │  Ledger       createTransaction · getTransactions                      │
//! │  Reporting    getFinancialSummary                                      │
//! │  Ops          healthcheck                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod customer;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod product;
pub mod report;
pub mod supplier;
pub mod transaction;
pub mod warehouse;

/// Builds the full RPC router with CORS and request tracing attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rpc/healthcheck", get(healthcheck))
        // Warehouse management
        .route("/rpc/createWarehouse", post(warehouse::create_warehouse))
        .route("/rpc/getWarehouses", get(warehouse::get_warehouses))
        // Product management
        .route("/rpc/createProduct", post(product::create_product))
        .route("/rpc/getProducts", get(product::get_products))
        // Inventory management
        .route("/rpc/updateInventory", post(inventory::update_inventory))
        .route("/rpc/getInventory", get(inventory::get_inventory))
        .route("/rpc/getLowStockItems", get(inventory::get_low_stock_items))
        // Customer management
        .route("/rpc/createCustomer", post(customer::create_customer))
        .route("/rpc/getCustomers", get(customer::get_customers))
        // Supplier management
        .route("/rpc/createSupplier", post(supplier::create_supplier))
        .route("/rpc/getSuppliers", get(supplier::get_suppliers))
        // Order management
        .route("/rpc/createOrder", post(order::create_order))
        .route("/rpc/getOrders", get(order::get_orders))
        .route("/rpc/createOrderItem", post(order::create_order_item))
        .route("/rpc/getOrderItems/:order_id", get(order::get_order_items))
        // Invoice management
        .route("/rpc/createInvoice", post(invoice::create_invoice))
        .route("/rpc/getInvoices", get(invoice::get_invoices))
        .route("/rpc/getOverdueInvoices", get(invoice::get_overdue_invoices))
        // Expense management
        .route("/rpc/createExpense", post(expense::create_expense))
        .route("/rpc/getExpenses", get(expense::get_expenses))
        .route(
            "/rpc/getExpensesByCategory",
            get(expense::get_expenses_by_category),
        )
        // Financial transactions
        .route("/rpc/createTransaction", post(transaction::create_transaction))
        .route("/rpc/getTransactions", get(transaction::get_transactions))
        // Reporting
        .route("/rpc/getFinancialSummary", get(report::get_financial_summary))
        // The browser client runs on a different origin in development
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness/readiness probe.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

async fn healthcheck(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthStatus> {
    let healthy = state.db.health_check().await;
    Json(HealthStatus {
        status: if healthy { "ok" } else { "degraded" },
        timestamp: Utc::now(),
    })
}
