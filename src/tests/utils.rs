use crate::db::connection::{init_db, Database};
use crate::extract::RawTable;
use crate::transform::{BusinessStatus, CleanedSale};
use chrono::NaiveDate;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh test database using the production schema
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "sales_test_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Export-shaped headers: mixed case, spaces, hyphens, exactly what the
/// transformer has to normalize.
pub const RAW_HEADERS: [&str; 14] = [
    "Order ID",
    "Date",
    "Status",
    "Fulfilment",
    "SKU",
    "Category",
    "Qty",
    "currency",
    "Amount",
    "ship-city",
    "ship-state",
    "ship-country",
    "B2B",
    "fulfilled-by",
];

pub fn raw_table(rows: Vec<Vec<&str>>) -> RawTable {
    RawTable {
        headers: RAW_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .into_iter()
            .map(|r| r.into_iter().map(str::to_string).collect())
            .collect(),
    }
}

/// One raw row with sensible defaults for the fields a test doesn't care about.
pub fn raw_row<'a>(
    order_id: &'a str,
    date: &'a str,
    status: &'a str,
    qty: &'a str,
    amount: &'a str,
    b2b: &'a str,
) -> Vec<&'a str> {
    vec![
        order_id, date, status, "Amazon", "SKU-1", "Kurta", qty, "INR", amount, "MUMBAI",
        "MAHARASHTRA", "IN", b2b, "Easy Ship",
    ]
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A cleaned row ready for the loader, overridable per test.
pub fn sale(order_id: &str, order_date: NaiveDate, amount: f64) -> CleanedSale {
    CleanedSale {
        order_id: order_id.to_string(),
        order_date,
        status: "Shipped".to_string(),
        fulfilment: Some("Amazon".to_string()),
        sku: Some("SKU-1".to_string()),
        category: Some("Kurta".to_string()),
        quantity: 1,
        currency: Some("INR".to_string()),
        amount,
        ship_city: Some("MUMBAI".to_string()),
        ship_state: Some("MAHARASHTRA".to_string()),
        ship_country: Some("IN".to_string()),
        b2b: 0,
        fulfilled_by: Some("Easy Ship".to_string()),
        business_status: BusinessStatus::InTransit,
    }
}
