// crates/csv2geojson-core/src/model/mod.rs

//! # GeoJSON Model
//!
//! The input row ([`Record`]) and the GeoJSON output tree
//! ([`FeatureCollection`] → [`Feature`] → [`Properties`] + [`Geometry`]).
//!
//! Type discriminators are produced by `#[serde(tag = "type")]`, which also
//! puts `"type"` first in every object.

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod record;

pub use record::Record;

/// Number of positional columns a row must carry.
pub const RECORD_WIDTH: usize = 7;

/// A GeoJSON `FeatureCollection`. Feature order is input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A GeoJSON `Feature` with flat string properties and a point geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// The five textual fields of a lookup record, under their fixed JSON names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Properties {
    pub timestamp: String,
    #[serde(rename = "IP")]
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
}

/// GeoJSON geometry. Only points are produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
}

impl Geometry {
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: Position { lon, lat },
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Geometry::Point { coordinates } => *coordinates,
        }
    }
}

/// A WGS84 position, serialized as `[lon, lat]` (X before Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lon, p.lat]
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Position { lon, lat }
    }
}
