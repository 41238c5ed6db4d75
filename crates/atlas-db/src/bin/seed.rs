//! # Seed Data Generator
//!
//! Populates the database with demo data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p atlas-db --bin seed
//!
//! # Specify database path
//! cargo run -p atlas-db --bin seed -- --db ./data/atlas.db
//! ```
//!
//! ## Generated Data
//! - 2 warehouses, 12 products with inventory spread across both
//! - 3 customers, 2 suppliers
//! - 1 sales order with line items (exercises the derived total)
//! - Invoices, expenses, and ledger transactions so the dashboard has
//!   something to aggregate

use std::env;

use atlas_core::{
    CreateExpenseInput, CreateInvoiceInput, CreateOrderInput, CreateOrderItemInput,
    CreatePartyInput, CreateProductInput, CreateTransactionInput, CreateWarehouseInput,
    OrderType, TransactionType, UpdateInventoryInput,
};
use atlas_db::{Database, DbConfig};
use chrono::{Duration, Utc};

/// (name, sku, price, cost) for the demo catalog.
const PRODUCTS: &[(&str, &str, &str, &str)] = &[
    ("Standing Desk", "FURN-001", "499.00", "310.00"),
    ("Office Chair", "FURN-002", "189.99", "95.00"),
    ("Bookshelf", "FURN-003", "129.50", "70.25"),
    ("LED Monitor 27\"", "ELEC-001", "249.99", "180.00"),
    ("Mechanical Keyboard", "ELEC-002", "89.99", "41.50"),
    ("Wireless Mouse", "ELEC-003", "39.99", "17.00"),
    ("USB-C Dock", "ELEC-004", "119.00", "68.00"),
    ("Notebook A5", "STAT-001", "4.99", "1.20"),
    ("Gel Pen Box", "STAT-002", "12.50", "5.75"),
    ("Stapler", "STAT-003", "8.99", "3.10"),
    ("Desk Lamp", "LGHT-001", "34.99", "15.40"),
    ("Floor Lamp", "LGHT-002", "79.99", "38.00"),
];

/// (category, description, amount) for demo expenses.
const EXPENSES: &[(&str, &str, &str)] = &[
    ("Office Supplies", "Printer paper and toner", "84.30"),
    ("Office Supplies", "Break room restock", "42.15"),
    ("Marketing", "Local ad campaign", "350.00"),
    ("Utilities", "Electricity bill", "210.77"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./atlas_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Atlas SMB Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./atlas_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Atlas SMB Seed Data Generator");
    println!("================================");
    println!("Database: {db_path}");
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Skip if the catalog already has rows to avoid duplicate SKU failures
    let existing = db.products().list().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} products", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding...");

    let mut warehouse_ids = Vec::new();
    for (name, location) in [("Central Warehouse", "Dock Street 4"), ("Northside Depot", "Mill Road 17")] {
        let warehouse = db
            .warehouses()
            .create(&CreateWarehouseInput {
                name: name.to_string(),
                location: location.to_string(),
                description: None,
            })
            .await?;
        warehouse_ids.push(warehouse.id);
    }
    println!("  {} warehouses", warehouse_ids.len());

    let mut product_ids = Vec::new();
    for (name, sku, price, cost) in PRODUCTS {
        let product = db
            .products()
            .create(&CreateProductInput {
                name: name.to_string(),
                description: None,
                sku: sku.to_string(),
                price: price.parse()?,
                cost: cost.parse()?,
            })
            .await?;
        product_ids.push(product.id);
    }
    println!("  {} products", product_ids.len());

    for (idx, product_id) in product_ids.iter().enumerate() {
        db.inventory()
            .upsert(&UpdateInventoryInput {
                product_id: *product_id,
                warehouse_id: warehouse_ids[idx % warehouse_ids.len()],
                quantity: (idx as i64 * 7) % 40,
                reorder_level: Some(10),
            })
            .await?;
    }
    println!("  {} inventory rows", product_ids.len());

    let mut customer_ids = Vec::new();
    for (name, email) in [
        ("Harbor Books", "orders@harborbooks.example"),
        ("Finch & Co", "accounts@finchco.example"),
        ("Maple Dental", "office@mapledental.example"),
    ] {
        let customer = db
            .customers()
            .create(&CreatePartyInput {
                name: name.to_string(),
                email: Some(email.to_string()),
                phone: None,
                address: None,
            })
            .await?;
        customer_ids.push(customer.id);
    }
    for name in ["Brightline Wholesale", "Cascade Imports"] {
        db.suppliers()
            .create(&CreatePartyInput {
                name: name.to_string(),
                email: None,
                phone: None,
                address: None,
            })
            .await?;
    }
    println!("  {} customers, 2 suppliers", customer_ids.len());

    // One sales order with items so the derived total is non-trivial
    let order = db
        .orders()
        .create(&CreateOrderInput {
            order_type: OrderType::Sales,
            customer_id: Some(customer_ids[0]),
            supplier_id: None,
            order_date: None,
        })
        .await?;
    for (product_id, quantity, unit_price) in [
        (product_ids[0], 1, "499.00"),
        (product_ids[1], 4, "189.99"),
        (product_ids[5], 4, "39.99"),
    ] {
        db.orders()
            .add_item(&CreateOrderItemInput {
                order_id: order.id,
                product_id,
                quantity,
                unit_price: unit_price.parse()?,
            })
            .await?;
    }
    let order = db.orders().get(order.id).await?.expect("seeded order");
    println!("  1 order totalling {}", order.total_amount);

    let invoice = db
        .invoices()
        .create(&CreateInvoiceInput {
            order_id: Some(order.id),
            customer_id: customer_ids[0],
            amount: order.total_amount,
            tax_amount: "0.00".parse()?,
            due_date: Utc::now() + Duration::days(30),
            issue_date: None,
        })
        .await?;
    println!("  1 invoice ({})", invoice.invoice_number);

    for (category, description, amount) in EXPENSES {
        db.expenses()
            .create(&CreateExpenseInput {
                description: description.to_string(),
                amount: amount.parse()?,
                category: category.to_string(),
                expense_date: None,
            })
            .await?;
    }
    println!("  {} expenses", EXPENSES.len());

    db.transactions()
        .create(&CreateTransactionInput {
            transaction_type: TransactionType::Income,
            amount: invoice.total_amount,
            description: format!("Payment for {}", invoice.invoice_number),
            invoice_id: Some(invoice.id),
            expense_id: None,
            transaction_date: None,
        })
        .await?;
    db.transactions()
        .create(&CreateTransactionInput {
            transaction_type: TransactionType::Expense,
            amount: "210.77".parse()?,
            description: "Electricity bill".to_string(),
            invoice_id: None,
            expense_id: None,
            transaction_date: None,
        })
        .await?;
    println!("  2 ledger transactions");

    let summary = db.reports().financial_summary().await?;
    println!();
    println!(
        "✓ Seed complete! income {} / expenses {} / net {}",
        summary.total_income, summary.total_expenses, summary.net_profit
    );

    Ok(())
}
