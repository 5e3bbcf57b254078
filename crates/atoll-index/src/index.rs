//! The per-category nearest-neighbour structure.

use crate::point::{Point, PointSet};
use atoll_core::geo;
use smallvec::SmallVec;

/// Fixed coarse search radius for nearest-point queries, in degrees.
///
/// One degree is ~111 km, so 0.5 degrees (~55 km) comfortably covers any
/// realistic range setting for a regional grid. A cell with no point
/// inside this radius treats the category as unreachable.
pub const SEARCH_RADIUS_DEG: f64 = 0.5;

/// Bucket edge length in degrees (~5.5 km).
const BUCKET_SIZE_DEG: f64 = 0.05;

/// An immutable spatial index over one category's points.
///
/// A uniform bucket grid in degree space: the coarse radius query walks
/// the buckets intersecting the query circle, then callers (or
/// [`nearest_distance_m`](PointIndex::nearest_distance_m)) select the true
/// nearest by squared planar degree-space distance and convert to metres
/// with the equirectangular formula. The planar tie-break is an
/// acceptable approximation at regional latitude spans.
///
/// Rebuilt whenever the backing [`PointSet`] changes; otherwise cached
/// and reused across computations.
#[derive(Clone, Debug)]
pub struct PointIndex {
    points: Vec<Point>,
    min_lat: f64,
    min_lon: f64,
    rows: usize,
    cols: usize,
    buckets: Vec<Vec<u32>>,
}

impl PointIndex {
    /// Build the index from a point set.
    pub fn build(set: &PointSet) -> Self {
        if set.points.is_empty() {
            return Self {
                points: Vec::new(),
                min_lat: 0.0,
                min_lon: 0.0,
                rows: 0,
                cols: 0,
                buckets: Vec::new(),
            };
        }

        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for p in &set.points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
        }

        let rows = ((max_lat - min_lat) / BUCKET_SIZE_DEG) as usize + 1;
        let cols = ((max_lon - min_lon) / BUCKET_SIZE_DEG) as usize + 1;
        let mut buckets = vec![Vec::new(); rows * cols];
        for (i, p) in set.points.iter().enumerate() {
            let r = ((p.lat - min_lat) / BUCKET_SIZE_DEG) as usize;
            let c = ((p.lon - min_lon) / BUCKET_SIZE_DEG) as usize;
            buckets[r.min(rows - 1) * cols + c.min(cols - 1)].push(i as u32);
        }

        Self {
            points: set.points.clone(),
            min_lat,
            min_lon,
            rows,
            cols,
            buckets,
        }
    }

    /// The indexed points, in source order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Positions into [`points`](Self::points) of all points within
    /// `radius_deg` of `(lat, lon)` in planar degree space. Positions,
    /// not [`Point::id`]s; callers resolve ids through the slice.
    pub fn within(&self, lat: f64, lon: f64, radius_deg: f64) -> SmallVec<[u32; 8]> {
        let mut hits = SmallVec::new();
        if self.points.is_empty() {
            return hits;
        }

        let r_lo = ((lat - radius_deg - self.min_lat) / BUCKET_SIZE_DEG).floor().max(0.0) as usize;
        let c_lo = ((lon - radius_deg - self.min_lon) / BUCKET_SIZE_DEG).floor().max(0.0) as usize;
        let r_hi = (((lat + radius_deg - self.min_lat) / BUCKET_SIZE_DEG).floor().max(0.0) as usize)
            .min(self.rows - 1);
        let c_hi = (((lon + radius_deg - self.min_lon) / BUCKET_SIZE_DEG).floor().max(0.0) as usize)
            .min(self.cols - 1);
        if r_lo > r_hi || c_lo > c_hi {
            return hits;
        }

        let r2 = radius_deg * radius_deg;
        for r in r_lo..=r_hi {
            for c in c_lo..=c_hi {
                for &i in &self.buckets[r * self.cols + c] {
                    let p = &self.points[i as usize];
                    let d_lat = p.lat - lat;
                    let d_lon = p.lon - lon;
                    if d_lat * d_lat + d_lon * d_lon <= r2 {
                        hits.push(i);
                    }
                }
            }
        }
        hits
    }

    /// Distance in metres to the nearest point, or `None` when no point
    /// lies within the fixed coarse search radius.
    ///
    /// Candidate selection uses squared planar degree distance (the same
    /// tie-break the coarse filter uses); the returned distance is the
    /// true equirectangular metric distance to that candidate.
    pub fn nearest_distance_m(&self, lat: f64, lon: f64) -> Option<f64> {
        let candidates = self.within(lat, lon, SEARCH_RADIUS_DEG);
        let mut best: Option<(f64, u32)> = None;
        for &i in &candidates {
            let p = &self.points[i as usize];
            let d_lat = p.lat - lat;
            let d_lon = p.lon - lon;
            let d2 = d_lat * d_lat + d_lon * d_lon;
            if best.map_or(true, |(b2, _)| d2 < b2) {
                best = Some((d2, i));
            }
        }
        best.map(|(_, i)| {
            let p = &self.points[i as usize];
            geo::distance_m(lat, lon, p.lat, p.lon)
        })
    }
}
