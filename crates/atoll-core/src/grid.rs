//! The raster grid specification and dense grid buffers.

use crate::bounds::GeoBounds;
use crate::error::ConfigError;
use crate::geo;
use serde::{Deserialize, Serialize};

/// Rasterization of a geographic region into a uniform cell grid.
///
/// `width = ceil(dLon / cell_size)`, `height = ceil(dLat / cell_size)`;
/// both are guaranteed positive by construction. Row 0 corresponds to the
/// southern edge and row index increases northward. A `GridSpec` is
/// immutable once a computation starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// The geographic extent being rasterized.
    pub bounds: GeoBounds,
    /// Cell edge length in degrees.
    pub cell_size: f64,
    width: usize,
    height: usize,
}

impl GridSpec {
    /// Create a grid spec, failing fast on malformed bounds or cell size
    /// before any allocation happens.
    pub fn new(bounds: GeoBounds, cell_size: f64) -> Result<Self, ConfigError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize { cell_size });
        }
        let width = ((bounds.max_lon - bounds.min_lon) / cell_size).ceil() as usize;
        let height = ((bounds.max_lat - bounds.min_lat) / cell_size).ceil() as usize;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(Self {
            bounds,
            cell_size,
            width,
            height,
        })
    }

    /// The default Mauritius region: 0.002 degree cells (~200 m) over the
    /// island's bounding box. Matches the dataset the engine ships against.
    pub fn mauritius() -> Self {
        let bounds = GeoBounds {
            min_lat: -20.55,
            max_lat: -19.95,
            min_lon: 57.3,
            max_lon: 57.8,
        };
        // Statically valid; new() cannot fail on these values.
        Self::new(bounds, 0.002).expect("mauritius preset is valid")
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Geographic centre of cell `(row, col)`.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        let lat = self.bounds.min_lat + (row as f64 + 0.5) * self.cell_size;
        let lon = self.bounds.min_lon + (col as f64 + 0.5) * self.cell_size;
        (lat, lon)
    }

    /// The cell containing a geographic point, or `None` if outside the
    /// bounds. Points exactly on the north/east edge clamp to the last
    /// row/column.
    pub fn cell_containing(&self, lat: f64, lon: f64) -> Option<(usize, usize)> {
        if !self.bounds.contains(lat, lon) {
            return None;
        }
        let row = ((lat - self.bounds.min_lat) / self.cell_size) as usize;
        let col = ((lon - self.bounds.min_lon) / self.cell_size) as usize;
        Some((row.min(self.height - 1), col.min(self.width - 1)))
    }

    /// Metric step distances between neighbouring cell centres:
    /// `(north_south, east_west, diagonal)` in metres, evaluated at the
    /// region's mean latitude.
    pub fn step_distances_m(&self) -> (f64, f64, f64) {
        let dy = geo::lat_step_m(self.cell_size);
        let dx = geo::lon_step_m(self.cell_size, self.bounds.mean_lat());
        (dy, dx, (dx * dx + dy * dy).sqrt())
    }
}

/// A dense row-major buffer of per-cell values plus the [`GridSpec`] it
/// was rasterized from.
///
/// Exclusively owned by the computation that created it and handed to the
/// caller as an immutable result.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    spec: GridSpec,
    values: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocate a grid filled with `fill`.
    pub fn filled(spec: GridSpec, fill: T) -> Self {
        Self {
            values: vec![fill; spec.cell_count()],
            spec,
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing buffer. The buffer length must equal
    /// `spec.cell_count()`.
    pub fn from_values(spec: GridSpec, values: Vec<T>) -> Self {
        assert_eq!(values.len(), spec.cell_count(), "grid buffer length");
        Self { spec, values }
    }

    /// The spec this grid was rasterized from.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The raw row-major buffer.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Mutable access to the raw buffer.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.values[self.spec.index(row, col)]
    }

    /// Consume the grid, returning the buffer.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}
