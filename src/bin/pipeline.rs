//! Batch runner: extract → transform → audit CSV → load. Exits non-zero
//! on the first stage that fails; the dashboard is a separate process.

use sales_pipeline::db::connection::{init_db, Database};
use sales_pipeline::{extract, load, transform};
use std::process::ExitCode;

const DEFAULT_RAW_PATH: &str = "data/raw_sales.csv";
const CLEANED_PATH: &str = "data/cleaned_sales.csv";

fn main() -> ExitCode {
    let raw_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RAW_PATH.to_string());

    let raw = match extract::extract_data(&raw_path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let cleaned = match transform::transform_data(raw) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = load::write_cleaned_csv(&cleaned.sales, CLEANED_PATH) {
        eprintln!("❌ {e}");
        return ExitCode::FAILURE;
    }

    let db = Database::from_env();
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        return ExitCode::FAILURE;
    }

    match load::load_sales(&db, &cleaned.sales) {
        Ok(count) => {
            println!("Pipeline executed successfully! Records loaded: {count}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
