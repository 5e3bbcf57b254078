//! Shared fixtures for Atoll test suites.
//!
//! Small synthetic grids, rasters, and point sets so scenario tests stay
//! readable and do not repeat construction boilerplate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use atoll_core::{GeoBounds, GridSpec, Raster};
use atoll_index::PointSet;

/// A ~22 km square test region south of the equator, 0.002 degree
/// (~200 m) cells, about 100 cells per side.
pub fn test_spec() -> GridSpec {
    let bounds = GeoBounds::new(-20.4, -20.2, 57.4, 57.6).unwrap();
    GridSpec::new(bounds, 0.002).unwrap()
}

/// The same region at a coarser resolution for cheap tests.
pub fn coarse_spec() -> GridSpec {
    let bounds = GeoBounds::new(-20.4, -20.2, 57.4, 57.6).unwrap();
    GridSpec::new(bounds, 0.01).unwrap()
}

/// A raster covering `spec`'s bounds at the grid's own resolution,
/// filled with a constant value.
pub fn flat_raster(spec: &GridSpec, value: f32) -> Raster {
    Raster {
        values: vec![value; spec.cell_count()],
        width: spec.width(),
        height: spec.height(),
        bounds: spec.bounds,
    }
}

/// A raster over `spec`'s bounds with per-cell values from a closure of
/// `(row, col)`.
pub fn raster_from_fn(spec: &GridSpec, f: impl Fn(usize, usize) -> f32) -> Raster {
    let mut values = Vec::with_capacity(spec.cell_count());
    for row in 0..spec.height() {
        for col in 0..spec.width() {
            values.push(f(row, col));
        }
    }
    Raster {
        values,
        width: spec.width(),
        height: spec.height(),
        bounds: spec.bounds,
    }
}

/// A point set with one POI at the centre of the given cell.
pub fn point_at_cell(spec: &GridSpec, row: usize, col: usize) -> PointSet {
    let (lat, lon) = spec.cell_center(row, col);
    PointSet::from_triples([(lat, lon, 1u64)])
}

/// A point set with one POI at the centre cell of the grid.
pub fn point_at_grid_center(spec: &GridSpec) -> PointSet {
    point_at_cell(spec, spec.height() / 2, spec.width() / 2)
}
