//! Sample dataset reader (row-oriented CSV fallback)

use std::path::Path;

use crate::error::{Result, StravaError};
use crate::models::ActivityRecord;

/// Read raw activity records from a sample CSV file.
/// Empty cells deserialize as absent fields, matching the API's optional
/// columns.
pub(crate) fn read_records(path: &Path) -> Result<Vec<ActivityRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| StravaError::storage(format!("Failed to open {:?}: {}", path, e)))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ActivityRecord =
            row.map_err(|e| StravaError::storage(format!("Failed to parse sample row: {}", e)))?;
        records.push(record);
    }
    Ok(records)
}
