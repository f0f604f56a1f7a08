use crate::db::metrics;
use crate::errors::ServerError;
use crate::load::load_sales;
use crate::tests::utils::{date, make_db, sale};
use crate::transform::BusinessStatus;

// Note: the query cache is process-wide and keyed by query text plus the
// bound range, so every test here uses its own year to stay isolated.

#[test]
fn empty_range_revenue_is_zero() {
    let db = make_db("metrics_empty");

    let revenue = metrics::total_revenue(&db, date(1999, 1, 1), date(1999, 12, 31)).unwrap();
    assert_eq!(revenue, 0.0);

    let aov = metrics::average_order_value(&db, date(1999, 1, 1), date(1999, 12, 31)).unwrap();
    assert_eq!(aov, 0.0);

    let rate = metrics::cancellation_rate(&db, date(1999, 1, 1), date(1999, 12, 31)).unwrap();
    assert_eq!(rate, 0.0);
}

#[test]
fn kpis_cover_the_inclusive_range() {
    let db = make_db("metrics_kpis");
    let mut inside = sale("ORD-1", date(2030, 3, 1), 100.0);
    inside.b2b = 1;
    let edge = sale("ORD-2", date(2030, 3, 31), 50.0);
    let outside = sale("ORD-3", date(2030, 4, 1), 999.0);
    load_sales(&db, &[inside, edge, outside]).unwrap();

    let start = date(2030, 3, 1);
    let end = date(2030, 3, 31);

    assert_eq!(metrics::total_revenue(&db, start, end).unwrap(), 150.0);
    assert_eq!(metrics::total_orders(&db, start, end).unwrap(), 2);
    assert_eq!(metrics::b2b_orders(&db, start, end).unwrap(), 1);
    assert_eq!(metrics::average_order_value(&db, start, end).unwrap(), 75.0);
}

#[test]
fn cancellation_rate_counts_raw_status_text() {
    let db = make_db("metrics_cancel");
    let mut cancelled = sale("ORD-1", date(2031, 5, 1), 0.0);
    cancelled.status = "Cancelled".to_string();
    cancelled.business_status = BusinessStatus::Cancelled;
    load_sales(
        &db,
        &[
            cancelled,
            sale("ORD-2", date(2031, 5, 2), 10.0),
            sale("ORD-3", date(2031, 5, 3), 10.0),
            sale("ORD-4", date(2031, 5, 4), 10.0),
        ],
    )
    .unwrap();

    let rate = metrics::cancellation_rate(&db, date(2031, 5, 1), date(2031, 5, 31)).unwrap();
    assert_eq!(rate, 25.0);
}

#[test]
fn grouped_revenue_sorts_and_limits() {
    let db = make_db("metrics_grouped");
    let mut sales = Vec::new();
    for i in 0..20 {
        let mut s = sale(&format!("ORD-{i}"), date(2032, 6, 1), (i + 1) as f64);
        s.ship_state = Some(format!("STATE-{i:02}"));
        s.category = Some(format!("CAT-{}", i % 3));
        sales.push(s);
    }
    load_sales(&db, &sales).unwrap();

    let start = date(2032, 6, 1);
    let end = date(2032, 6, 30);

    let states = metrics::revenue_by_state(&db, start, end).unwrap();
    assert_eq!(states.len(), 15);
    assert_eq!(states[0], ("STATE-19".to_string(), 20.0));
    // Descending revenue throughout.
    assert!(states.windows(2).all(|w| w[0].1 >= w[1].1));

    let categories = metrics::revenue_by_category(&db, start, end).unwrap();
    assert_eq!(categories.len(), 3);
    assert!(categories.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn monthly_revenue_buckets_ascending() {
    let db = make_db("metrics_monthly");
    load_sales(
        &db,
        &[
            sale("ORD-1", date(2033, 1, 15), 10.0),
            sale("ORD-2", date(2033, 1, 20), 15.0),
            sale("ORD-3", date(2033, 2, 5), 40.0),
        ],
    )
    .unwrap();

    let rows =
        metrics::monthly_revenue(&db, date(2033, 1, 1), date(2033, 12, 31)).unwrap();
    assert_eq!(
        rows,
        vec![
            ("2033-01".to_string(), 25.0),
            ("2033-02".to_string(), 40.0),
        ]
    );
}

#[test]
fn business_status_distribution_counts_orders() {
    let db = make_db("metrics_status");
    let mut delivered = sale("ORD-1", date(2034, 7, 1), 10.0);
    delivered.business_status = BusinessStatus::Delivered;
    let mut delivered2 = sale("ORD-2", date(2034, 7, 2), 10.0);
    delivered2.business_status = BusinessStatus::Delivered;
    let pending = {
        let mut s = sale("ORD-3", date(2034, 7, 3), 10.0);
        s.business_status = BusinessStatus::Pending;
        s
    };
    load_sales(&db, &[delivered, delivered2, pending]).unwrap();

    let rows = metrics::orders_by_business_status(&db, date(2034, 7, 1), date(2034, 7, 31))
        .unwrap();
    assert_eq!(
        rows,
        vec![
            ("Delivered".to_string(), 2.0),
            ("Pending".to_string(), 1.0),
        ]
    );
}

#[test]
fn repeated_query_hits_the_cache() {
    let db = make_db("metrics_cache");
    load_sales(&db, &[sale("ORD-1", date(2040, 1, 10), 100.0)]).unwrap();

    let start = date(2040, 1, 1);
    let end = date(2040, 1, 31);
    assert_eq!(metrics::total_revenue(&db, start, end).unwrap(), 100.0);

    // Write behind the cache's back; the cached value must come back.
    db.with_conn(|conn| {
        conn.execute(
            "UPDATE sales_data SET amount = 999.0 WHERE order_id = 'ORD-1'",
            [],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .unwrap();

    assert_eq!(metrics::total_revenue(&db, start, end).unwrap(), 100.0);
}

#[test]
fn date_bounds_span_the_store() {
    let db = make_db("metrics_bounds");
    assert_eq!(metrics::date_bounds(&db).unwrap(), None);

    load_sales(
        &db,
        &[
            sale("ORD-1", date(2041, 2, 10), 10.0),
            sale("ORD-2", date(2041, 9, 3), 10.0),
        ],
    )
    .unwrap();

    assert_eq!(
        metrics::date_bounds(&db).unwrap(),
        Some((date(2041, 2, 10), date(2041, 9, 3)))
    );
}
