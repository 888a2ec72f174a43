//! csv2geojson-cli
//! ===============
//!
//! Command-line interface for the `csv2geojson-core` converter.
//!
//! The binary (`csv2geojson`) is the primary deliverable. Argument parsing
//! and logger setup live in this library target so they can be tested
//! without spawning a process.
//!
//! Basic usage:
//!
//! ```text
//! csv2geojson hosts.csv                  # writes hosts.geojson
//! csv2geojson --no-header --naming fixed hosts.csv   # writes output.geojson
//! csv2geojson --strict -o map.geojson hosts.csv
//! ```
//!
//! For programmatic access use [`csv2geojson_core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;

pub use args::{CliArgs, LogLevel, Naming};
