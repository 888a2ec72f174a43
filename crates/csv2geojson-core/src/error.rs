// crates/csv2geojson-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Every way a conversion run can fail.
///
/// Each variant maps onto one stage of the pipeline (open, header, read,
/// map, serialize, write) so the message alone tells the user which step
/// broke.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("error opening CSV file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading CSV header: input is empty")]
    MissingHeader,

    #[error("error reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row on line {line} has {found} columns, expected at least {expected}", expected = crate::model::RECORD_WIDTH)]
    RowTooShort { line: u64, found: usize },

    #[error("invalid {field} on line {line}: {value:?}")]
    InvalidCoordinate {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("error converting to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error creating GeoJSON file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing GeoJSON file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
