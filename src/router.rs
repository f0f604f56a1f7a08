use crate::db::connection::Database;
use crate::db::metrics;
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use chrono::NaiveDate;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);

            // Default the range to the full span of the store; an empty
            // store falls back to today so the page still renders.
            let today = chrono::Local::now().date_naive();
            let (min_date, max_date) = metrics::date_bounds(db)?.unwrap_or((today, today));

            let start = match params.get("start") {
                Some(s) => parse_date_param("start", s)?,
                None => min_date,
            };
            let end = match params.get("end") {
                Some(s) => parse_date_param("end", s)?,
                None => max_date,
            };

            // Each metric is fetched on its own; a failure becomes a
            // placeholder for that widget, not a failed page.
            let vm = DashboardVm {
                start,
                end,
                total_revenue: metrics::total_revenue(db, start, end),
                total_orders: metrics::total_orders(db, start, end),
                b2b_orders: metrics::b2b_orders(db, start, end),
                cancellation_rate: metrics::cancellation_rate(db, start, end),
                average_order_value: metrics::average_order_value(db, start, end),
                revenue_by_fulfilment: metrics::revenue_by_fulfilment(db, start, end),
                revenue_by_state: metrics::revenue_by_state(db, start, end),
                monthly_revenue: metrics::monthly_revenue(db, start, end),
                revenue_by_category: metrics::revenue_by_category(db, start, end),
                orders_by_business_status: metrics::orders_by_business_status(db, start, end),
            };

            html_response(dashboard_page(&vm))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_date_param(name: &str, value: &str) -> Result<NaiveDate, ServerError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ServerError::BadRequest(format!("invalid {name} date: {value}")))
}

fn parse_query(req: &astra::Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
