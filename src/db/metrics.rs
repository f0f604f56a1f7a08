//! Aggregate queries behind the dashboard. Every query is scoped to an
//! inclusive order-date range bound as `?1`/`?2` and goes through the
//! process-wide result cache.

use crate::db::cache::{self, CachedResult};
use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::params;

const SQL_TOTAL_REVENUE: &str = "SELECT IFNULL(SUM(amount), 0.0)
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2";

const SQL_TOTAL_ORDERS: &str = "SELECT COUNT(DISTINCT order_id)
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2";

const SQL_B2B_ORDERS: &str = "SELECT COUNT(*)
     FROM sales_data
     WHERE b2b = 1
       AND order_date BETWEEN ?1 AND ?2";

const SQL_CANCELLATION_RATE: &str = "SELECT IFNULL(
         ROUND(SUM(CASE WHEN status LIKE '%Cancelled%' THEN 1 ELSE 0 END) * 100.0
               / COUNT(*), 2),
         0.0)
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2";

const SQL_AVG_ORDER_VALUE: &str = "SELECT IFNULL(
         ROUND(SUM(amount) * 1.0 / COUNT(DISTINCT order_id), 2),
         0.0)
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2";

const SQL_REVENUE_BY_FULFILMENT: &str = "SELECT IFNULL(fulfilment, 'Unknown'), SUM(amount) AS revenue
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2
     GROUP BY fulfilment";

const SQL_REVENUE_BY_STATE: &str = include_str!("../../sql/revenue_by_state.sql");

const SQL_MONTHLY_REVENUE: &str = "SELECT strftime('%Y-%m', order_date) AS month, SUM(amount) AS revenue
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2
     GROUP BY month
     ORDER BY month";

const SQL_REVENUE_BY_CATEGORY: &str = include_str!("../../sql/revenue_by_category.sql");

const SQL_ORDERS_BY_BUSINESS_STATUS: &str = "SELECT business_status, COUNT(*) AS n
     FROM sales_data
     WHERE order_date BETWEEN ?1 AND ?2
     GROUP BY business_status
     ORDER BY n DESC";

const SQL_DATE_BOUNDS: &str = "SELECT MIN(order_date), MAX(order_date) FROM sales_data";

/// Oldest and newest order dates in the store, used as the default
/// dashboard range. `None` while the store is empty.
pub fn date_bounds(db: &Database) -> Result<Option<(NaiveDate, NaiveDate)>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(SQL_DATE_BOUNDS, [], |row| {
            Ok((
                row.get::<_, Option<NaiveDate>>(0)?,
                row.get::<_, Option<NaiveDate>>(1)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .map(|(min, max)| min.zip(max))
}

fn scalar(
    db: &Database,
    sql: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<f64, ServerError> {
    let key = cache::key(sql, &start.to_string(), &end.to_string());
    if let Some(CachedResult::Scalar(v)) = cache::get(&key) {
        return Ok(v);
    }

    let v = db.with_conn(|conn| {
        conn.query_row(sql, params![start, end], |row| row.get::<_, f64>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })?;

    cache::put(key, CachedResult::Scalar(v));
    Ok(v)
}

fn grouped(
    db: &Database,
    sql: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    let key = cache::key(sql, &start.to_string(), &end.to_string());
    if let Some(CachedResult::Rows(rows)) = cache::get(&key) {
        return Ok(rows);
    }

    let rows = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mapped = stmt
            .query_map(params![start, end], |row| {
                Ok((
                    row.get::<_, Option<String>>(0)?.unwrap_or_else(|| "Unknown".into()),
                    row.get::<_, f64>(1)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in mapped {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })?;

    cache::put(key, CachedResult::Rows(rows.clone()));
    Ok(rows)
}

pub fn total_revenue(db: &Database, start: NaiveDate, end: NaiveDate) -> Result<f64, ServerError> {
    scalar(db, SQL_TOTAL_REVENUE, start, end)
}

pub fn total_orders(db: &Database, start: NaiveDate, end: NaiveDate) -> Result<i64, ServerError> {
    scalar(db, SQL_TOTAL_ORDERS, start, end).map(|v| v as i64)
}

pub fn b2b_orders(db: &Database, start: NaiveDate, end: NaiveDate) -> Result<i64, ServerError> {
    scalar(db, SQL_B2B_ORDERS, start, end).map(|v| v as i64)
}

/// Percentage of rows whose raw status text contains "Cancelled".
pub fn cancellation_rate(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<f64, ServerError> {
    scalar(db, SQL_CANCELLATION_RATE, start, end)
}

pub fn average_order_value(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<f64, ServerError> {
    scalar(db, SQL_AVG_ORDER_VALUE, start, end)
}

pub fn revenue_by_fulfilment(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    grouped(db, SQL_REVENUE_BY_FULFILMENT, start, end)
}

/// Top 15 states by revenue.
pub fn revenue_by_state(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    grouped(db, SQL_REVENUE_BY_STATE, start, end)
}

pub fn monthly_revenue(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    grouped(db, SQL_MONTHLY_REVENUE, start, end)
}

/// Top 10 categories by revenue.
pub fn revenue_by_category(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    grouped(db, SQL_REVENUE_BY_CATEGORY, start, end)
}

pub fn orders_by_business_status(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(String, f64)>, ServerError> {
    grouped(db, SQL_ORDERS_BY_BUSINESS_STATUS, start, end)
}
