//! Reading taxonomy records from a CSV export.

use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use taxo_model::Record;

use crate::error::{IngestError, Result};

const COLUMNS: [&str; 6] = ["sector", "domain", "country", "set", "grouping", "list"];

/// Read the dataset from a CSV file with a header row.
///
/// Headers match the six categorical columns case-insensitively; any extra
/// columns are ignored. Cell content is kept literally, so pre-joined
/// multi-value cells survive as single strings.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let indices = resolve_columns(&headers, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let field = |index: usize| row.get(index).unwrap_or_default().to_string();
        records.push(Record {
            sector: field(indices[0]),
            domain: field(indices[1]),
            country: field(indices[2]),
            set: field(indices[3]),
            grouping: field(indices[4]),
            list: field(indices[5]),
        });
    }
    debug!(path = %path.display(), records = records.len(), "read dataset");
    Ok(records)
}

fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<[usize; 6]> {
    let mut indices = [0usize; 6];
    for (slot, &column) in COLUMNS.iter().enumerate() {
        indices[slot] = headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(column))
            .ok_or(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })?;
    }
    Ok(indices)
}
