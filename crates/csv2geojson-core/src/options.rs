// crates/csv2geojson-core/src/options.rs

//! # Conversion Options
//!
//! The two historical behaviours of the converter (skip a header and derive
//! the output name, or keep every row and write a fixed file) are expressed
//! as explicit switches here instead of separate code paths.

use std::path::{Path, PathBuf};

/// Extension used for derived output names.
pub const GEOJSON_EXTENSION: &str = "geojson";

/// Output name used by [`OutputNaming::Fixed`] when none is given.
pub const DEFAULT_FIXED_NAME: &str = "output.geojson";

/// What to do with the first row of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// First row is a header and is discarded.
    #[default]
    Skip,
    /// First row is data.
    Keep,
}

/// How latitude/longitude fields that are not valid numbers are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Substitute `0.0` and keep going.
    #[default]
    Lenient,
    /// Abort the run with [`crate::ConvertError::InvalidCoordinate`].
    Strict,
}

/// How the output file name is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputNaming {
    /// `<input stem>.geojson`, in the current directory.
    #[default]
    Derived,
    /// Always the given name.
    Fixed(String),
}

impl OutputNaming {
    pub fn fixed_default() -> Self {
        OutputNaming::Fixed(DEFAULT_FIXED_NAME.to_string())
    }

    /// Resolves the output path for `input`.
    ///
    /// Derived names drop the directory and everything from the last `.` of
    /// the file name, so `data/hosts.csv` becomes `hosts.geojson` (relative to
    /// the working directory, not to `data/`) and `.csv` becomes `.geojson`.
    pub fn resolve(&self, input: &Path) -> PathBuf {
        match self {
            OutputNaming::Derived => {
                let name = input
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let base = name.rfind('.').map_or(name.as_str(), |dot| &name[..dot]);
                PathBuf::from(format!("{base}.{GEOJSON_EXTENSION}"))
            }
            OutputNaming::Fixed(name) => PathBuf::from(name),
        }
    }
}

/// All knobs of a conversion run. `Default` gives the header-skipping,
/// name-deriving, lenient behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub header: HeaderMode,
    pub naming: OutputNaming,
    pub coordinates: CoordinatePolicy,
}

impl ConvertOptions {
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    pub fn with_naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_coordinates(mut self, coordinates: CoordinatePolicy) -> Self {
        self.coordinates = coordinates;
        self
    }
}
