use clap::{Parser, ValueEnum};
use csv2geojson_core::{
    options::DEFAULT_FIXED_NAME, ConvertOptions, CoordinatePolicy, HeaderMode, OutputNaming,
};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for csv2geojson
#[derive(Debug, Parser)]
#[command(
    name = "csv2geojson",
    version,
    about = "Convert geolocated IP lookup CSV files into GeoJSON point collections"
)]
pub struct CliArgs {
    /// Path to the input CSV (timestamp,ip,city,region,country,latitude,longitude)
    pub input: Option<PathBuf>,

    /// Treat the first row as data instead of a header
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// How to name the output file
    #[arg(long, value_enum, default_value_t = Naming::Derived)]
    pub naming: Naming,

    /// File name used with `--naming fixed`
    #[arg(long = "fixed-name", default_value = DEFAULT_FIXED_NAME)]
    pub fixed_name: String,

    /// Write to this path instead of the name chosen by `--naming`
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Fail on latitude/longitude values that are not numbers instead of using 0
    #[arg(long)]
    pub strict: bool,

    /// Log verbosity (overrides RUST_LOG)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Naming {
    /// `<input name>.geojson`
    Derived,
    /// The value of `--fixed-name`
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl CliArgs {
    pub fn convert_options(&self) -> ConvertOptions {
        let header = if self.no_header {
            HeaderMode::Keep
        } else {
            HeaderMode::Skip
        };
        let naming = match self.naming {
            Naming::Derived => OutputNaming::Derived,
            Naming::Fixed => OutputNaming::Fixed(self.fixed_name.clone()),
        };
        let coordinates = if self.strict {
            CoordinatePolicy::Strict
        } else {
            CoordinatePolicy::Lenient
        };

        ConvertOptions::default()
            .with_header(header)
            .with_naming(naming)
            .with_coordinates(coordinates)
    }

    /// Output path: `--output` if given, otherwise the naming mode's choice.
    pub fn output_path(&self, input: &std::path::Path) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.convert_options().naming.resolve(input),
        }
    }
}
