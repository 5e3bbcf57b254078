//! Geocoded points of interest.

use serde::{Deserialize, Serialize};

/// One geocoded point of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Source feature identifier.
    pub id: u64,
}

/// The ordered list of points for one POI category.
///
/// Read-only to the engine; order is preserved from the source data so
/// that index tie-breaks are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    /// The points, in source order.
    pub points: Vec<Point>,
}

impl PointSet {
    /// A point set from raw `(lat, lon, id)` triples.
    pub fn from_triples(triples: impl IntoIterator<Item = (f64, f64, u64)>) -> Self {
        Self {
            points: triples
                .into_iter()
                .map(|(lat, lon, id)| Point { lat, lon, id })
                .collect(),
        }
    }

    /// Whether the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}
