mod dashboard_tests;
mod metrics_tests;
mod router_tests;
mod utils;
