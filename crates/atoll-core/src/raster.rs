//! External input rasters (population density, road friction).
//!
//! Rasters arrive pre-parsed from the collaborator layer in the shape the
//! source datasets use on the wire: a flat row-major `values` buffer
//! plus `width`, `height`, and geographic bounds. Row 0 is the southern
//! edge, consistent with [`Grid`](crate::Grid).
//!
//! A raster does not need to share the score grid's resolution; the
//! engine samples it nearest-cell by geographic position.

use crate::bounds::GeoBounds;
use crate::error::ComputeError;
use serde::{Deserialize, Serialize};

/// A read-only input raster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Raster {
    /// Row-major per-cell values, row 0 = south.
    pub values: Vec<f32>,
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
    /// Geographic extent covered by the raster.
    pub bounds: GeoBounds,
}

impl Raster {
    /// Validate that the dimensions are non-zero and match the buffer.
    pub fn validate(&self) -> Result<(), ComputeError> {
        if self.width == 0 || self.height == 0 {
            return Err(ComputeError::EmptyRaster {
                width: self.width,
                height: self.height,
            });
        }
        if self.values.len() != self.width * self.height {
            return Err(ComputeError::RasterShapeMismatch {
                width: self.width,
                height: self.height,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Sample the raster at a geographic point using nearest-cell lookup.
    ///
    /// Returns `None` outside the raster's bounds.
    pub fn sample(&self, lat: f64, lon: f64) -> Option<f32> {
        if !self.bounds.contains(lat, lon) {
            return None;
        }
        let b = &self.bounds;
        let row_f = (lat - b.min_lat) / (b.max_lat - b.min_lat) * self.height as f64;
        let col_f = (lon - b.min_lon) / (b.max_lon - b.min_lon) * self.width as f64;
        let row = (row_f as usize).min(self.height - 1);
        let col = (col_f as usize).min(self.width - 1);
        Some(self.values[row * self.width + col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> GeoBounds {
        GeoBounds::new(-20.55, -19.95, 57.3, 57.8).unwrap()
    }

    fn checker(width: usize, height: usize) -> Raster {
        let values = (0..width * height)
            .map(|i| ((i % width + i / width) % 2) as f32)
            .collect();
        Raster {
            values,
            width,
            height,
            bounds: bounds(),
        }
    }

    #[test]
    fn validate_accepts_consistent_shape() {
        assert!(checker(10, 6).validate().is_ok());
    }

    #[test]
    fn validate_rejects_short_buffer() {
        let mut r = checker(10, 6);
        r.values.pop();
        assert!(matches!(
            r.validate(),
            Err(ComputeError::RasterShapeMismatch { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        // A 0x0 raster trivially satisfies the length check but has no
        // cell for sample() to clamp to.
        let r = Raster {
            values: vec![],
            width: 0,
            height: 0,
            bounds: bounds(),
        };
        assert!(matches!(r.validate(), Err(ComputeError::EmptyRaster { .. })));
        let flat = Raster {
            values: vec![],
            width: 4,
            height: 0,
            bounds: bounds(),
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn sample_outside_bounds_is_none() {
        let r = checker(10, 6);
        assert_eq!(r.sample(-21.0, 57.5), None);
    }

    #[test]
    fn sample_corners() {
        let r = checker(10, 6);
        // South-west corner maps to cell (0, 0) = value 0.
        assert_eq!(r.sample(-20.5499, 57.3001), Some(0.0));
        // One cell east is the other checker colour.
        assert_eq!(r.sample(-20.5499, 57.3501), Some(1.0));
    }

    #[test]
    fn north_east_edge_clamps_to_last_cell() {
        let r = checker(10, 6);
        assert!(r.sample(-19.95, 57.8).is_some());
    }

    #[test]
    fn wire_shape_round_trip() {
        // The on-disk format used by the population / road-friction
        // datasets: flat values plus dimensions and bounds.
        let json = r#"{
            "values": [0.0, 1.0, 2.0, 3.0],
            "width": 2,
            "height": 2,
            "bounds": {"min_lat": -20.55, "max_lat": -19.95,
                       "min_lon": 57.3, "max_lon": 57.8}
        }"#;
        let r: Raster = serde_json::from_str(json).unwrap();
        assert!(r.validate().is_ok());
        assert_eq!(r.width, 2);
        let back = serde_json::to_string(&r).unwrap();
        let again: Raster = serde_json::from_str(&back).unwrap();
        assert_eq!(r, again);
    }
}
