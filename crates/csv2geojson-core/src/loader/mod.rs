// crates/csv2geojson-core/src/loader/mod.rs

//! # CSV Loader
//!
//! Handles the physical layer (file open, delimited parsing, header row) and
//! hands back raw rows in input order. Mapping rows onto records happens in
//! [`crate::model::Record::from_row`].

use crate::error::{ConvertError, Result};
use crate::options::HeaderMode;
use csv::{ByteRecord, ReaderBuilder};
use log::debug;
use std::io::Read;

mod common_io;

pub use common_io::open_input;

/// A raw CSV row together with the line it started on.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub fields: ByteRecord,
}

/// Result of reading the whole input.
#[derive(Debug, Clone, Default)]
pub struct LoadedRows {
    pub header: Option<ByteRecord>,
    pub rows: Vec<RawRow>,
}

/// Reads every row of `reader` into memory.
///
/// Fields are kept as raw bytes; text decoding happens per field in
/// [`crate::model::Record::from_row`], so a stray non-UTF-8 byte does not
/// abort the run. All rows must have the same number of fields as the first
/// one (header included); anything else is reported as [`ConvertError::Csv`]. With
/// [`HeaderMode::Skip`] an input without any row fails with
/// [`ConvertError::MissingHeader`].
pub fn read_rows<R: Read>(reader: R, header: HeaderMode) -> Result<LoadedRows> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    let mut records = csv_reader.byte_records();
    let mut loaded = LoadedRows::default();

    if header == HeaderMode::Skip {
        let first = records.next().ok_or(ConvertError::MissingHeader)??;
        debug!("skipping header row: {:?}", first);
        loaded.header = Some(first);
    }

    for record in records {
        let fields = record?;
        let line = fields.position().map_or(0, |p| p.line());
        loaded.rows.push(RawRow { line, fields });
    }

    debug!("read {} data rows", loaded.rows.len());
    Ok(loaded)
}
