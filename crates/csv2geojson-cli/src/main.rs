//! csv2geojson: convert IP lookup CSV files into GeoJSON
//!
//! Usage examples
//! --------------
//!
//! - Input with a header row, output named after the input
//!   $ csv2geojson lookups.csv            # -> lookups.geojson
//!
//! - Header-less input, fixed output name
//!   $ csv2geojson --no-header --naming fixed lookups.csv   # -> output.geojson
//!
//! - Refuse rows whose coordinates are not numbers
//!   $ csv2geojson --strict lookups.csv
//!
//! Run without arguments to print usage.
use anyhow::Context;
use clap::{CommandFactory, Parser};
use csv2geojson_cli::logging::init_logger;
use csv2geojson_cli::CliArgs;
use csv2geojson_core::convert_file;
use log::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // A missing input is reported as usage, not as a failure.
    let Some(input) = args.input.as_deref() else {
        println!("{}", CliArgs::command().render_help());
        return Ok(());
    };

    init_logger(args.log_level.into());

    let options = args.convert_options();
    let output = args.output_path(input);

    let stats = convert_file(input, &output, &options)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    info!(
        "{} rows read, {} features written, header skipped: {}",
        stats.rows_read, stats.features_written, stats.header_skipped
    );
    println!("GeoJSON file '{}' created successfully.", output.display());
    Ok(())
}
