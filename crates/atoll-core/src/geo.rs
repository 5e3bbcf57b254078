//! Equirectangular geodesy helpers.
//!
//! All distances use the equirectangular approximation, which is accurate
//! to well under a percent at the regional scales (tens of kilometres) the
//! engine targets:
//!
//! `d = R * sqrt(dLat^2 + (dLon * cos(meanLat))^2)` with angles in radians.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equirectangular distance between two WGS84 points, in metres.
pub fn distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let x = d_lon * ((lat1 + lat2) / 2.0).to_radians().cos();
    (d_lat * d_lat + x * x).sqrt() * EARTH_RADIUS_M
}

/// Metric length of one cell along the north/south axis.
pub fn lat_step_m(cell_size_deg: f64) -> f64 {
    cell_size_deg.to_radians() * EARTH_RADIUS_M
}

/// Metric length of one cell along the east/west axis at `mean_lat`.
pub fn lon_step_m(cell_size_deg: f64, mean_lat_deg: f64) -> f64 {
    cell_size_deg.to_radians() * mean_lat_deg.to_radians().cos() * EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_latitude() {
        // 1 degree of latitude is ~111.2 km everywhere.
        let d = distance_m(-20.0, 57.5, -19.0, 57.5);
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let at_equator = distance_m(0.0, 57.0, 0.0, 58.0);
        let at_20s = distance_m(-20.0, 57.0, -20.0, 58.0);
        assert!(at_20s < at_equator);
        // cos(20 deg) ~ 0.9397
        assert!((at_20s / at_equator - (20.0f64).to_radians().cos()).abs() < 1e-3);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(distance_m(-20.2, 57.5, -20.2, 57.5), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = distance_m(-20.1, 57.4, -20.3, 57.6);
        let b = distance_m(-20.3, 57.6, -20.1, 57.4);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn step_sizes_consistent_with_distance() {
        // One cell of 0.002 deg at -20.25: lat step should match the
        // point-to-point distance along a meridian.
        let step = lat_step_m(0.002);
        let d = distance_m(-20.25, 57.5, -20.248, 57.5);
        assert!((step - d).abs() < 0.01, "step {step} vs dist {d}");
    }
}
