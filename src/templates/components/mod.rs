use maud::{html, Markup};

pub mod chart;
pub mod error;

pub use chart::{bar_chart, line_chart};
pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Informational placeholder shown where a chart would be empty.
pub fn info_box(message: &str) -> Markup {
    html! {
        div class="info-box" { (message) }
    }
}

/// Warning placeholder shown when a metric query failed; the rest of
/// the page renders normally.
pub fn warning_box(message: &str) -> Markup {
    html! {
        div class="warning-box" { (message) }
    }
}
