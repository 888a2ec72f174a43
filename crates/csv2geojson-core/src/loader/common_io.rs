// crates/csv2geojson-core/src/loader/common_io.rs
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens the input file and buffers it.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
