//! Workspace root for csv2geojson-rs.
//!
//! Re-exports [`csv2geojson_core`] so the whole converter is reachable from
//! the workspace crate.
pub use csv2geojson_core::*;
