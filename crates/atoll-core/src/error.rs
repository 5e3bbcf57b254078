//! Error types for the Atoll engine.
//!
//! Two tiers: [`ConfigError`] for invalid inputs rejected before any
//! allocation, and [`ComputeError`] for failures surfaced by a running
//! computation. Graceful-degradation cases (missing rasters, empty point
//! sets) are deliberately *not* errors; the engine substitutes documented
//! defaults instead.

use std::error::Error;
use std::fmt;

/// Invalid configuration rejected before a computation starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Geographic bounds with `max <= min` on some axis.
    InvalidBounds {
        /// Which axis is degenerate (`"lat"` or `"lon"`).
        axis: &'static str,
        /// The offending minimum.
        min: f64,
        /// The offending maximum.
        max: f64,
    },
    /// Non-positive or non-finite cell size.
    InvalidCellSize {
        /// The offending value, in degrees.
        cell_size: f64,
    },
    /// A grid dimension came out zero after rasterization.
    EmptyGrid,
    /// `road_factor` below the 1.0 floor.
    InvalidRoadFactor {
        /// The offending value.
        road_factor: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { axis, min, max } => {
                write!(f, "invalid {axis} bounds: min {min} >= max {max}")
            }
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell size must be positive and finite, got {cell_size}")
            }
            Self::EmptyGrid => write!(f, "grid rasterizes to zero cells"),
            Self::InvalidRoadFactor { road_factor } => {
                write!(f, "road factor must be >= 1.0, got {road_factor}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from a running accessibility computation.
#[derive(Clone, Debug, PartialEq)]
pub enum ComputeError {
    /// The request's configuration was invalid.
    InvalidConfiguration(ConfigError),
    /// An input raster's declared dimensions do not match its buffer.
    RasterShapeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// An input raster declares a zero dimension.
    EmptyRaster {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::RasterShapeMismatch { width, height, len } => write!(
                f,
                "raster shape mismatch: {width}x{height} declared, buffer has {len} values"
            ),
            Self::EmptyRaster { width, height } => {
                write!(f, "raster has a zero dimension: {width}x{height}")
            }
        }
    }
}

impl Error for ComputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ComputeError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
