// crates/csv2geojson-core/src/model/convert.rs
use super::{Feature, FeatureCollection, Geometry, Properties, Record};

impl From<Record> for Feature {
    fn from(r: Record) -> Self {
        Feature {
            properties: Properties {
                timestamp: r.timestamp,
                ip: r.ip,
                city: r.city,
                region: r.region,
                country: r.country,
            },
            // GeoJSON order: longitude first.
            geometry: Geometry::point(r.longitude, r.latitude),
        }
    }
}

impl FeatureCollection {
    /// **Record → GeoJSON:** one feature per record, order preserved.
    pub fn from_records(records: Vec<Record>) -> Self {
        FeatureCollection {
            features: records.into_iter().map(Feature::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
