//! # Domain Types
//!
//! One struct per table in the record store (Warehouse, Product, Inventory,
//! Customer, Supplier, Order, OrderItem, Invoice, Expense, Transaction),
//! plus the status enums, the `Create*Input` bodies of the RPC mutations,
//! and the two reporting shapes.
//!
//! Orders and invoices carry two identities: the database-assigned integer
//! `id` used by relations, and a generated, unique-constrained business
//! number (`order_number` / `invoice_number`) shown to humans.
//!
//! Validation rules for the input structs live in [`crate::validation`];
//! derived-field semantics (totals) are noted on the fields that hold them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Enums
// =============================================================================

/// Whether an order sells to a customer or purchases from a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Outbound: exactly one customer is attached.
    Sales,
    /// Inbound: exactly one supplier is attached.
    Purchase,
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Direction of a financial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Payment status of an invoice.
///
/// `Overdue` is a *stored* flag set by whoever manages collections; the
/// overdue *query* independently compares `due_date` against the clock.
/// The two notions are intentionally not reconciled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

// =============================================================================
// Warehouse
// =============================================================================

/// A physical storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createWarehouse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWarehouseInput {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale or purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Stock Keeping Unit - business identifier, unique across products.
    pub sku: String,
    /// Selling price.
    pub price: Money,
    /// Acquisition cost (for margin calculations).
    pub cost: Money,
    pub created_at: DateTime<Utc>,
}

/// Input for `createProduct`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sku: String,
    pub price: Money,
    pub cost: Money,
}

// =============================================================================
// Inventory
// =============================================================================

/// Stock level of one product in one warehouse.
///
/// Composite identity is `(product_id, warehouse_id)`: at most one row per
/// pair, maintained by upsert rather than plain insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Inventory {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    /// Stock falling strictly below this level flags the item for reorder.
    pub reorder_level: i64,
    pub updated_at: DateTime<Utc>,
}

/// Input for `updateInventory` (upsert by `(product_id, warehouse_id)`).
///
/// An omitted `reorder_level` leaves the stored level untouched on update
/// and falls back to [`crate::DEFAULT_REORDER_LEVEL`] on first insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInventoryInput {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub reorder_level: Option<i64>,
}

// =============================================================================
// Customer / Supplier
// =============================================================================

/// A party the business sells to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A party the business purchases from.
///
/// Structurally identical to [`Customer`], kept as a distinct type and table
/// because the two roles never mix in orders or invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createCustomer` and `createSupplier`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePartyInput {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// A sales or purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Generated business number, e.g. `ORD-1754300000000-042`.
    pub order_number: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Set iff `order_type` is `sales`.
    pub customer_id: Option<i64>,
    /// Set iff `order_type` is `purchase`.
    pub supplier_id: Option<i64>,
    pub status: OrderStatus,
    /// Derived: always equals the sum of `total_price` over the order's items.
    pub total_amount: Money,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createOrder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderInput {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    /// Derived: `quantity × unit_price`, computed once at creation.
    pub total_price: Money,
}

/// Input for `createOrderItem`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItemInput {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer invoice, optionally tied to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i64,
    /// Generated business number, e.g. `INV-1754300000000-913`.
    pub invoice_number: String,
    pub order_id: Option<i64>,
    pub customer_id: i64,
    pub amount: Money,
    pub tax_amount: Money,
    /// Derived: `amount + tax_amount`, computed once at creation and never
    /// recomputed afterward.
    pub total_amount: Money,
    pub payment_status: PaymentStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createInvoice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceInput {
    #[serde(default)]
    pub order_id: Option<i64>,
    pub customer_id: i64,
    pub amount: Money,
    pub tax_amount: Money,
    pub due_date: DateTime<Utc>,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Expense
// =============================================================================

/// A standalone business expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: Money,
    /// Free-text category; grouping is exact, case-sensitive string match.
    pub category: String,
    pub expense_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createExpense`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub expense_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Transaction
// =============================================================================

/// A ledger entry, optionally referencing the invoice or expense behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Money,
    pub description: String,
    pub invoice_id: Option<i64>,
    pub expense_id: Option<i64>,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for `createTransaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionInput {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Money,
    pub description: String,
    #[serde(default)]
    pub invoice_id: Option<i64>,
    #[serde(default)]
    pub expense_id: Option<i64>,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Reporting
// =============================================================================

/// Computed dashboard view over transactions and invoices. Not stored.
///
/// `pending_invoices`/`overdue_invoices` trust the *stored*
/// `payment_status`; see [`PaymentStatus`] for the deliberate divergence
/// from the date-based overdue query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub pending_invoices: Money,
    pub overdue_invoices: Money,
}

/// One group of the expenses-by-category aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&OrderType::Sales).unwrap(), "\"sales\"");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"income\""
        );
    }

    #[test]
    fn test_order_input_renames_type_field() {
        let input: CreateOrderInput =
            serde_json::from_str(r#"{"type": "purchase", "supplier_id": 7}"#).unwrap();
        assert_eq!(input.order_type, OrderType::Purchase);
        assert_eq!(input.supplier_id, Some(7));
        assert_eq!(input.customer_id, None);
        assert!(input.order_date.is_none());
    }

    #[test]
    fn test_financial_summary_wire_names_are_camel_case() {
        let summary = FinancialSummary {
            total_income: Money::from_cents(100050),
            total_expenses: Money::from_cents(30000),
            net_profit: Money::from_cents(70050),
            pending_invoices: Money::zero(),
            overdue_invoices: Money::zero(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalIncome"], "1000.50");
        assert_eq!(json["totalExpenses"], "300.00");
        assert_eq!(json["netProfit"], "700.50");
        assert_eq!(json["pendingInvoices"], "0.00");
    }
}
