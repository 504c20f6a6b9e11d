//! Table data model and data file loading.
//!
//! Rows and columns are read from JSON files (or the bundled sample) once at
//! startup. Each row gets a [`RowId`] in load order.

mod column;
mod row;
mod value;

use std::path::Path;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info};

pub use column::{Accessor, Column, SELECT_ACCESSOR};
pub use row::{row, Row, RowId, Rows, DETAILS_FIELD};
pub use value::Value;

/// Bundled sample rows.
const SAMPLE_ROWS: &str = include_str!("../../data/rows.json");

/// Bundled sample columns.
const SAMPLE_COLUMNS: &str = include_str!("../../data/columns.json");

/// Errors that can occur while loading table data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read a data file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// A row entry is not a JSON object.
    #[error("Row {index} is not an object")]
    NotAnObject { index: usize },

    /// A row field holds something other than a string, number or boolean.
    #[error("Row {index}, field '{field}': only strings, numbers and booleans are supported")]
    UnsupportedValue { index: usize, field: String },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Parse a JSON array of row objects, assigning ids in order.
pub fn parse_rows(json: &str) -> Result<Rows> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|source| {
        DataError::Parse {
            what: "rows".to_string(),
            source,
        }
    })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let serde_json::Value::Object(map) = entry else {
                return Err(DataError::NotAnObject { index });
            };
            let fields = map
                .into_iter()
                .map(|(field, value)| match serde_json::from_value::<Value>(value) {
                    Ok(v) => Ok((field, v)),
                    Err(_) => Err(DataError::UnsupportedValue { index, field }),
                })
                .collect::<Result<_>>()?;
            Ok(Rc::new(Row::new(RowId(index as u64), fields)))
        })
        .collect()
}

/// Parse a JSON array of column descriptors.
pub fn parse_columns(json: &str) -> Result<Vec<Column>> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        what: "columns".to_string(),
        source,
    })
}

/// Load rows from a JSON file.
pub fn load_rows(path: &Path) -> Result<Rows> {
    let rows = parse_rows(&read(path)?)?;
    info!(path = %path.display(), count = rows.len(), "Loaded rows");
    Ok(rows)
}

/// Load columns from a JSON file.
pub fn load_columns(path: &Path) -> Result<Vec<Column>> {
    let columns = parse_columns(&read(path)?)?;
    info!(path = %path.display(), count = columns.len(), "Loaded columns");
    Ok(columns)
}

/// The bundled sample rows.
pub fn sample_rows() -> Result<Rows> {
    debug!("Using bundled sample rows");
    parse_rows(SAMPLE_ROWS)
}

/// The bundled sample columns.
pub fn sample_columns() -> Result<Vec<Column>> {
    debug!("Using bundled sample columns");
    parse_columns(SAMPLE_COLUMNS)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })
}
