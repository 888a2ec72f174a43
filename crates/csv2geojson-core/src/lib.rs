// crates/csv2geojson-core/src/lib.rs

//! csv2geojson-core
//! ================
//!
//! Turns geolocated IP lookup records stored as CSV into a GeoJSON
//! `FeatureCollection` of points.
//!
//! The pipeline is a single in-memory pass:
//!
//! 1. [`loader`] reads every row (optionally dropping a header),
//! 2. [`model`] maps each row onto a [`Record`] and then a [`Feature`],
//! 3. [`writer`] pretty-prints the collection and writes one file.
//!
//! ```no_run
//! use csv2geojson_core::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let opts = ConvertOptions::default();
//! let input = Path::new("hosts.csv");
//! let output = opts.naming.resolve(input); // hosts.geojson
//! let stats = convert_file(input, &output, &opts)?;
//! println!("{} features", stats.features_written);
//! # Ok::<(), csv2geojson_core::ConvertError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod options;
pub mod writer;

use log::{debug, info};
use std::io::Read;
use std::path::Path;

// Re-exports
pub use crate::common::ConvertStats;
pub use crate::error::{ConvertError, Result};
pub use crate::model::{Feature, FeatureCollection, Geometry, Position, Properties, Record};
pub use crate::options::{ConvertOptions, CoordinatePolicy, HeaderMode, OutputNaming};

/// Reads delimited text from `reader` and builds the feature collection.
///
/// Output naming in `options` is not consulted here.
pub fn convert_reader<R: Read>(
    reader: R,
    options: &ConvertOptions,
) -> Result<(FeatureCollection, ConvertStats)> {
    let loaded = loader::read_rows(reader, options.header)?;

    let mut stats = ConvertStats {
        rows_read: loaded.rows.len(),
        header_skipped: loaded.header.is_some(),
        ..ConvertStats::default()
    };

    let records = loaded
        .rows
        .iter()
        .map(|row| Record::from_row(&row.fields, row.line, options.coordinates, &mut stats))
        .collect::<Result<Vec<_>>>()?;

    let collection = FeatureCollection::from_records(records);
    stats.features_written = collection.len();
    Ok((collection, stats))
}

/// Converts the CSV file at `input` and writes GeoJSON to `output`.
///
/// Nothing is written unless every row converted; a failure while writing
/// may leave a partial file behind.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertStats> {
    debug!("converting {} -> {}", input.display(), output.display());

    let reader = loader::open_input(input)?;
    let (collection, stats) = convert_reader(reader, options)?;
    let bytes = writer::to_pretty_json(&collection)?;
    writer::write_output(output, &bytes)?;

    info!(
        "{}: {} rows, {} features, {} coordinates defaulted to 0",
        output.display(),
        stats.rows_read,
        stats.features_written,
        stats.defaulted_coordinates
    );
    Ok(stats)
}
