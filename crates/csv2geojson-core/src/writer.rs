// crates/csv2geojson-core/src/writer.rs
use crate::error::{ConvertError, Result};
use crate::model::FeatureCollection;
use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One indentation step of the pretty printer.
pub const INDENT: &[u8] = b"    ";

/// Serializes the collection as pretty JSON with a 4-space indent.
///
/// The output has no trailing newline, and identical input always gives
/// identical bytes.
pub fn to_pretty_json(collection: &FeatureCollection) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    collection.serialize(&mut ser)?;
    Ok(out)
}

/// Creates (or truncates) `path` and writes `bytes` to it.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|source| ConvertError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
