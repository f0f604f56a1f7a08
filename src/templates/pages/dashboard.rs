use crate::errors::ServerError;
use crate::templates::components::chart::{bar_chart, line_chart, ValueKind};
use crate::templates::components::{card, info_box, warning_box};
use crate::templates::desktop_layout;
use chrono::NaiveDate;
use maud::{html, Markup};

type MetricResult<T> = Result<T, ServerError>;
type GroupedResult = MetricResult<Vec<(String, f64)>>;

/// Everything the dashboard page needs, fetched per metric so one failed
/// query degrades to a placeholder instead of taking the page down.
pub struct DashboardVm {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_revenue: MetricResult<f64>,
    pub total_orders: MetricResult<i64>,
    pub b2b_orders: MetricResult<i64>,
    pub cancellation_rate: MetricResult<f64>,
    pub average_order_value: MetricResult<f64>,
    pub revenue_by_fulfilment: GroupedResult,
    pub revenue_by_state: GroupedResult,
    pub monthly_revenue: GroupedResult,
    pub revenue_by_category: GroupedResult,
    pub orders_by_business_status: GroupedResult,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "E-Commerce Sales Dashboard",
        html! {
            main class="container" {
                (card(
                    "Filters",
                    html! {
                        form class="filters" method="get" action="/" {
                            label {
                                "Start date"
                                input type="date" name="start" value=(vm.start.format("%Y-%m-%d"));
                            }
                            label {
                                "End date"
                                input type="date" name="end" value=(vm.end.format("%Y-%m-%d"));
                            }
                            button type="submit" { "Apply" }
                        }
                    },
                ))

                h1 { "Key Business Metrics" }
                div class="kpi-grid" {
                    (kpi_card("Total Revenue", &vm.total_revenue.as_ref().map(|v| format!("₹ {v:.2}"))))
                    (kpi_card("Total Orders", &vm.total_orders.as_ref().map(|v| v.to_string())))
                    (kpi_card("B2B Orders", &vm.b2b_orders.as_ref().map(|v| v.to_string())))
                    (kpi_card("Cancellation Rate", &vm.cancellation_rate.as_ref().map(|v| format!("{v:.2}%"))))
                    (kpi_card("Avg Order Value", &vm.average_order_value.as_ref().map(|v| format!("₹ {v:.2}"))))
                }

                (chart_section(
                    "Fulfilment Revenue Split",
                    &vm.revenue_by_fulfilment,
                    "No fulfilment data available.",
                    ValueKind::Money,
                    ChartStyle::Bar,
                ))
                (chart_section(
                    "Revenue by State (Top 15)",
                    &vm.revenue_by_state,
                    "No state data available.",
                    ValueKind::Money,
                    ChartStyle::Bar,
                ))
                (chart_section(
                    "Monthly Revenue Trend",
                    &vm.monthly_revenue,
                    "No data available for selected date range.",
                    ValueKind::Money,
                    ChartStyle::Line,
                ))
                (chart_section(
                    "Top 10 Categories",
                    &vm.revenue_by_category,
                    "No category data available.",
                    ValueKind::Money,
                    ChartStyle::Bar,
                ))
                (chart_section(
                    "Order Status Distribution (Business View)",
                    &vm.orders_by_business_status,
                    "No order status data available for selected date range.",
                    ValueKind::Count,
                    ChartStyle::Bar,
                ))
            }
        },
    )
}

enum ChartStyle {
    Bar,
    Line,
}

fn kpi_card(label: &str, value: &Result<String, &ServerError>) -> Markup {
    card(
        label,
        html! {
            @match value {
                Ok(v) => {
                    div class="kpi-value" { (v) }
                }
                Err(e) => {
                    (warning_box(&e.to_string()))
                }
            }
        },
    )
}

fn chart_section(
    title: &str,
    result: &GroupedResult,
    empty_msg: &str,
    kind: ValueKind,
    style: ChartStyle,
) -> Markup {
    let body = match result {
        Err(e) => warning_box(&e.to_string()),
        Ok(rows) if rows.is_empty() => info_box(empty_msg),
        Ok(rows) => match style {
            ChartStyle::Bar => bar_chart(rows, kind),
            ChartStyle::Line => line_chart(rows, kind),
        },
    };
    card(title, body)
}
