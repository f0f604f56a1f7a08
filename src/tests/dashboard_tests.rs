use crate::errors::ServerError;
use crate::templates::pages::{dashboard_page, DashboardVm};
use crate::tests::utils::date;

/// A view model with a mix of failed, healthy and empty metrics.
fn mixed_vm() -> DashboardVm {
    DashboardVm {
        start: date(2024, 1, 1),
        end: date(2024, 1, 31),
        total_revenue: Err(ServerError::DbError("disk I/O error".into())),
        total_orders: Ok(2),
        b2b_orders: Ok(1),
        cancellation_rate: Ok(0.0),
        average_order_value: Ok(50.0),
        revenue_by_fulfilment: Err(ServerError::DbError("disk I/O error".into())),
        revenue_by_state: Ok(vec![("MAHARASHTRA".to_string(), 100.0)]),
        monthly_revenue: Ok(vec![]),
        revenue_by_category: Ok(vec![("Kurta".to_string(), 100.0)]),
        orders_by_business_status: Ok(vec![]),
    }
}

#[test]
fn failed_metric_degrades_to_warning_placeholder() {
    let html = dashboard_page(&mixed_vm()).into_string();

    // The failed KPI and chart fall back to warning boxes...
    assert_eq!(html.matches("warning-box").count(), 2);
    assert!(html.contains("Database Error: disk I/O error"));

    // ...while every other widget still renders.
    assert!(html.contains("Total Orders"));
    assert!(html.contains("MAHARASHTRA"));
    assert!(html.contains("Kurta"));
}

#[test]
fn empty_groupings_render_info_placeholders() {
    let html = dashboard_page(&mixed_vm()).into_string();

    assert!(html.contains("info-box"));
    assert!(html.contains("No data available for selected date range."));
    assert!(html.contains("No order status data available for selected date range."));
}
