pub mod cache;
pub mod connection;
pub mod metrics;

pub use connection::{init_db, Database};
