use crate::db::connection::Database;
use crate::errors::{PipelineError, ServerError};
use crate::transform::CleanedSale;
use rusqlite::params;
use std::path::Path;

const SQL_UPSERT_SALE: &str = r#"
INSERT INTO sales_data (
    order_id, order_date, status, fulfilment, sku, category,
    quantity, currency, amount, ship_city, ship_state, ship_country,
    b2b, fulfilled_by, business_status
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
ON CONFLICT(order_id) DO UPDATE SET
    order_date = excluded.order_date,
    status = excluded.status,
    fulfilment = excluded.fulfilment,
    sku = excluded.sku,
    category = excluded.category,
    quantity = excluded.quantity,
    currency = excluded.currency,
    amount = excluded.amount,
    ship_city = excluded.ship_city,
    ship_state = excluded.ship_state,
    ship_country = excluded.ship_country,
    b2b = excluded.b2b,
    fulfilled_by = excluded.fulfilled_by,
    business_status = excluded.business_status
"#;

/// Audit/replay copy of the cleaned rows, written before anything
/// touches the store.
pub fn write_cleaned_csv(sales: &[CleanedSale], path: impl AsRef<Path>) -> Result<(), PipelineError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| PipelineError::Load(e.to_string()))?;
    }

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| PipelineError::Load(format!("{}: {e}", path.display())))?;
    for sale in sales {
        wtr.serialize(sale)
            .map_err(|e| PipelineError::Load(e.to_string()))?;
    }
    wtr.flush().map_err(|e| PipelineError::Load(e.to_string()))?;

    println!("Cleaned CSV written to {}", path.display());
    Ok(())
}

/// Upsert every cleaned row keyed on order_id, one transaction for the
/// whole batch. Any failure rolls the batch back; there is no partial
/// commit beyond what SQLite itself guarantees.
pub fn load_sales(db: &Database, sales: &[CleanedSale]) -> Result<usize, PipelineError> {
    if sales.is_empty() {
        return Err(PipelineError::Load("no cleaned rows to load".into()));
    }

    println!("Loading {} records into the store...", sales.len());

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for sale in sales {
            tx.execute(
                SQL_UPSERT_SALE,
                params![
                    sale.order_id,
                    sale.order_date,
                    sale.status,
                    sale.fulfilment,
                    sale.sku,
                    sale.category,
                    sale.quantity,
                    sale.currency,
                    sale.amount,
                    sale.ship_city,
                    sale.ship_state,
                    sale.ship_country,
                    sale.b2b,
                    sale.fulfilled_by,
                    sale.business_status.as_str(),
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .map_err(|e| PipelineError::Load(e.to_string()))?;

    println!("✅ Loaded {} records successfully!", sales.len());
    Ok(sales.len())
}
