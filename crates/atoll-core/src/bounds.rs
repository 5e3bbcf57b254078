//! Geographic bounding boxes.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// An axis-aligned geographic bounding box in WGS84 degrees.
///
/// `min_lat` is the southern edge; `min_lon` the western edge. Validated
/// at construction: both axes must be non-degenerate and finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Southern edge, degrees latitude.
    pub min_lat: f64,
    /// Northern edge, degrees latitude.
    pub max_lat: f64,
    /// Western edge, degrees longitude.
    pub min_lon: f64,
    /// Eastern edge, degrees longitude.
    pub max_lon: f64,
}

impl GeoBounds {
    /// Create a bounding box, rejecting degenerate or non-finite extents.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, ConfigError> {
        if !(min_lat.is_finite() && max_lat.is_finite()) || min_lat >= max_lat {
            return Err(ConfigError::InvalidBounds {
                axis: "lat",
                min: min_lat,
                max: max_lat,
            });
        }
        if !(min_lon.is_finite() && max_lon.is_finite()) || min_lon >= max_lon {
            return Err(ConfigError::InvalidBounds {
                axis: "lon",
                min: min_lon,
                max: max_lon,
            });
        }
        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Latitude of the region's centre, used for the equirectangular
    /// longitude correction.
    pub fn mean_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    /// Whether a point falls inside the box (edges inclusive).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}
