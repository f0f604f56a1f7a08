use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// One cached query result: either a single aggregate value or the
/// label/value rows of a grouped rollup.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResult {
    Scalar(f64),
    Rows(Vec<(String, f64)>),
}

// Process-wide, cleared only on restart. Keyed by query text plus the
// bound date range so distinct ranges never collide.
fn store() -> &'static Mutex<HashMap<String, CachedResult>> {
    static CACHE: OnceLock<Mutex<HashMap<String, CachedResult>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn key(sql: &str, start: &str, end: &str) -> String {
    format!("{sql}|{start}|{end}")
}

pub fn get(key: &str) -> Option<CachedResult> {
    store().lock().ok()?.get(key).cloned()
}

pub fn put(key: String, value: CachedResult) {
    if let Ok(mut map) = store().lock() {
        map.insert(key, value);
    }
}
