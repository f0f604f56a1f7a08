use crate::errors::PipelineError;
use std::path::Path;

/// Untyped tabular data straight off the export. Header names arrive
/// inconsistently cased and hyphenated; the transformer sorts that out.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a comma-separated export into memory. A missing or malformed file
/// is an `Extract` error for the runner to log and bail on.
pub fn extract_data(path: impl AsRef<Path>) -> Result<RawTable, PipelineError> {
    let path = path.as_ref();
    println!("Starting data extraction from {}", path.display());

    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| PipelineError::Extract(format!("{}: {e}", path.display())))?;

    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::Extract(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| PipelineError::Extract(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    println!("Extraction successful. Rows: {}", rows.len());
    Ok(RawTable { headers, rows })
}
