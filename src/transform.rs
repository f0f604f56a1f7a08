use crate::errors::PipelineError;
use crate::extract::RawTable;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Upstream export dates look like "01-15-24".
const ORDER_DATE_FORMAT: &str = "%m-%d-%y";

/// Columns that must exist after header normalization. Hyphenated names are
/// how the export spells them; normalization only fixes case and spaces.
const REQUIRED_COLUMNS: [&str; 14] = [
    "order_id",
    "date",
    "status",
    "fulfilment",
    "sku",
    "category",
    "qty",
    "currency",
    "amount",
    "ship-city",
    "ship-state",
    "ship-country",
    "b2b",
    "fulfilled-by",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusinessStatus {
    Delivered,
    Cancelled,
    Returned,
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Other,
}

impl BusinessStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessStatus::Delivered => "Delivered",
            BusinessStatus::Cancelled => "Cancelled",
            BusinessStatus::Returned => "Returned",
            BusinessStatus::Pending => "Pending",
            BusinessStatus::InTransit => "In Transit",
            BusinessStatus::Other => "Other",
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered substring rules over the raw status text. Evaluated top to bottom
/// with the last matching rule winning, so a status carrying both "Cancelled"
/// and "Return" lands on Returned.
const STATUS_RULES: [(&[&str], BusinessStatus); 4] = [
    (&["delivered"], BusinessStatus::Delivered),
    (&["cancelled"], BusinessStatus::Cancelled),
    (&["return"], BusinessStatus::Returned),
    (&["pending"], BusinessStatus::Pending),
];

/// Shipping-flavoured statuses only count as In Transit when nothing above
/// claimed the row ("Shipped - Delivered to Buyer" stays Delivered).
const IN_TRANSIT_PATTERNS: [&str; 4] = ["shipped", "out for delivery", "shipping", "picked"];

pub fn classify_status(status: &str) -> BusinessStatus {
    let lowered = status.to_lowercase();

    let mut label = BusinessStatus::Other;
    for (patterns, rule_label) in STATUS_RULES {
        if patterns.iter().any(|p| lowered.contains(p)) {
            label = rule_label;
        }
    }

    if label == BusinessStatus::Other
        && IN_TRANSIT_PATTERNS.iter().any(|p| lowered.contains(p))
    {
        label = BusinessStatus::InTransit;
    }

    label
}

/// One row in canonical shape, ready for the audit CSV and the upsert.
/// Optional text fields hold `None` where the export left a blank, which
/// the loader stores as SQL NULL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedSale {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub fulfilment: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub quantity: i64,
    pub currency: Option<String>,
    pub amount: f64,
    pub ship_city: Option<String>,
    pub ship_state: Option<String>,
    pub ship_country: Option<String>,
    pub b2b: i64,
    pub fulfilled_by: Option<String>,
    pub business_status: BusinessStatus,
}

#[derive(Debug)]
pub struct TransformOutput {
    pub sales: Vec<CleanedSale>,
    pub rows_in: usize,
    pub duplicates_removed: usize,
    /// Rows dropped by the quality checks (negative amount, unparseable date).
    pub removed_rows: usize,
}

/// Normalize a header the way the export needs: trim, lowercase,
/// spaces to underscores. Hyphens are left alone.
fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_quantity(value: &str) -> i64 {
    value
        .trim()
        .parse::<f64>()
        .map(|q| q.round() as i64)
        .unwrap_or(0)
        .max(0)
}

fn parse_amount(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

fn parse_b2b(value: &str) -> i64 {
    match value.trim().to_lowercase().as_str() {
        "true" => 1,
        _ => 0,
    }
}

fn parse_order_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ORDER_DATE_FORMAT).ok()
}

/// Pure function from raw table to cleaned rows. Steps, in order: dedup,
/// header normalization, required-column selection, type coercion, quality
/// filters, business-status classification.
pub fn transform_data(raw: RawTable) -> Result<TransformOutput, PipelineError> {
    println!("Starting transformation...");

    if raw.is_empty() {
        return Err(PipelineError::Transform("input table is empty".into()));
    }

    // Exact-duplicate rows go first, keeping first occurrence order.
    let rows_in = raw.rows.len();
    let mut seen: HashSet<&Vec<String>> = HashSet::new();
    let mut rows: Vec<&Vec<String>> = Vec::new();
    for row in &raw.rows {
        if seen.insert(row) {
            rows.push(row);
        }
    }
    let duplicates_removed = rows_in - rows.len();

    let index: HashMap<String, usize> = raw
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header(h), i))
        .collect();

    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = *index
            .get(name)
            .ok_or_else(|| PipelineError::Transform(format!("missing required column: {name}")))?;
    }
    let [order_id_col, date_col, status_col, fulfilment_col, sku_col, category_col, qty_col, currency_col, amount_col, city_col, state_col, country_col, b2b_col, fulfilled_by_col] =
        columns;

    fn field(row: &[String], col: usize) -> &str {
        row.get(col).map(String::as_str).unwrap_or("")
    }

    let mut sales = Vec::with_capacity(rows.len());
    let mut removed_rows = 0usize;

    for row in rows {
        let order_date = parse_order_date(field(row, date_col));
        let amount = parse_amount(field(row, amount_col));

        // Quality checks: no negative revenue, no rows without a date.
        let Some(order_date) = order_date else {
            removed_rows += 1;
            continue;
        };
        if amount < 0.0 {
            removed_rows += 1;
            continue;
        }

        let status = field(row, status_col).trim().to_string();
        let business_status = classify_status(&status);

        sales.push(CleanedSale {
            order_id: field(row, order_id_col).trim().to_string(),
            order_date,
            status,
            fulfilment: opt_text(field(row, fulfilment_col)),
            sku: opt_text(field(row, sku_col)),
            category: opt_text(field(row, category_col)),
            quantity: parse_quantity(field(row, qty_col)),
            currency: opt_text(field(row, currency_col)),
            amount,
            ship_city: opt_text(field(row, city_col)),
            ship_state: opt_text(field(row, state_col)),
            ship_country: opt_text(field(row, country_col)),
            b2b: parse_b2b(field(row, b2b_col)),
            fulfilled_by: opt_text(field(row, fulfilled_by_col)),
            business_status,
        });
    }

    println!("Rows removed during quality checks: {removed_rows}");
    println!("Transformation complete. Cleaned rows: {}", sales.len());

    Ok(TransformOutput {
        sales,
        rows_in,
        duplicates_removed,
        removed_rows,
    })
}
