//! Flood input and output types.

use atoll_core::{ComputeError, GeoBounds};
use serde::{Deserialize, Serialize};

/// Metadata shipped with the encoded flood rasters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodMetadata {
    /// Raster width in cells.
    pub width: usize,
    /// Raster height in cells.
    pub height: usize,
    /// Geographic extent of the rasters; propagated unchanged to every
    /// overlay produced from them.
    pub bounds: GeoBounds,
    /// The elevation encoded as 255, in metres.
    #[serde(rename = "max_height")]
    pub max_height_m: f32,
}

impl FloodMetadata {
    /// Cell count implied by the dimensions.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Which flood model an overlay is composited from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodMode {
    /// Relative height above nearest drainage (HAND): river flooding.
    River,
    /// Absolute elevation: sea-level rise.
    Sea,
}

/// A pre-encoded elevation raster (river/HAND or sea variant).
///
/// Per cell: the encoded height byte and a land flag (`0` = ocean or
/// masked, anything else = land).
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationRaster {
    /// Encoded heights, row-major.
    pub encoded: Vec<u8>,
    /// Land flags, row-major, same length as `encoded`.
    pub land: Vec<u8>,
}

impl ElevationRaster {
    /// Validate the raster against the metadata dimensions.
    pub fn validate(&self, meta: &FloodMetadata) -> Result<(), ComputeError> {
        if self.encoded.len() != meta.cell_count() || self.land.len() != meta.cell_count() {
            return Err(ComputeError::RasterShapeMismatch {
                width: meta.width,
                height: meta.height,
                len: self.encoded.len().min(self.land.len()),
            });
        }
        Ok(())
    }
}

/// A composited overlay raster: RGBA bytes plus the source bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayRaster {
    /// RGBA pixels, `width * height * 4` bytes, row-major in the source
    /// raster's row order.
    pub pixels: Vec<u8>,
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
    /// Geographic bounds, identical to the metadata's.
    pub bounds: GeoBounds,
}

impl OverlayRaster {
    /// Number of cells with non-zero opacity.
    pub fn visible_cells(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] > 0).count()
    }
}

/// Result of one compositing request.
///
/// `Empty` is the explicit no-overlay sentinel: requested level at or
/// below zero, or the mode's source raster not loaded. Flood
/// visualization is advisory, so missing inputs are not errors.
#[derive(Clone, Debug, PartialEq)]
pub enum FloodOverlay {
    /// Nothing to draw.
    Empty,
    /// A composited overlay.
    Raster(OverlayRaster),
}

impl FloodOverlay {
    /// The overlay raster, if any.
    pub fn raster(&self) -> Option<&OverlayRaster> {
        match self {
            Self::Empty => None,
            Self::Raster(r) => Some(r),
        }
    }
}
