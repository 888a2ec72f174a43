// crates/csv2geojson-core/src/model/record.rs
use super::RECORD_WIDTH;
use crate::common::ConvertStats;
use crate::error::{ConvertError, Result};
use crate::options::CoordinatePolicy;
use csv::ByteRecord;
use log::warn;

/// One input row, mapped by column position.
///
/// | column | field     |
/// |--------|-----------|
/// | 0      | timestamp |
/// | 1      | ip        |
/// | 2      | city      |
/// | 3      | region    |
/// | 4      | country   |
/// | 5      | latitude  |
/// | 6      | longitude |
///
/// Extra columns are ignored. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: String,
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Record {
    /// Maps a raw CSV row onto a `Record`.
    ///
    /// `line` is the 1-based line number of the row and is only used in
    /// errors and log messages. Coordinates that fail to parse are handled
    /// according to `policy`; every defaulted field bumps
    /// `stats.defaulted_coordinates`.
    pub fn from_row(
        row: &ByteRecord,
        line: u64,
        policy: CoordinatePolicy,
        stats: &mut ConvertStats,
    ) -> Result<Self> {
        if row.len() < RECORD_WIDTH {
            return Err(ConvertError::RowTooShort {
                line,
                found: row.len(),
            });
        }

        let latitude = parse_coordinate(&text(row, 5), "latitude", line, policy, stats)?;
        let longitude = parse_coordinate(&text(row, 6), "longitude", line, policy, stats)?;

        Ok(Record {
            timestamp: text(row, 0),
            ip: text(row, 1),
            city: text(row, 2),
            region: text(row, 3),
            country: text(row, 4),
            latitude,
            longitude,
        })
    }
}

fn text(row: &ByteRecord, i: usize) -> String {
    String::from_utf8_lossy(&row[i]).into_owned()
}

// NaN and infinities are rejected as well: JSON cannot carry them.
fn parse_coordinate(
    text: &str,
    field: &'static str,
    line: u64,
    policy: CoordinatePolicy,
    stats: &mut ConvertStats,
) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => match policy {
            CoordinatePolicy::Lenient => {
                warn!("line {line}: {field} {text:?} is not a number, using 0");
                stats.defaulted_coordinates += 1;
                Ok(0.0)
            }
            CoordinatePolicy::Strict => Err(ConvertError::InvalidCoordinate {
                line,
                field,
                value: text.to_string(),
            }),
        },
    }
}
