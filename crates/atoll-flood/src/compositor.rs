//! Water-level compositing over encoded elevation rasters.

use atoll_core::ComputeError;
use tracing::debug;

use crate::types::{ElevationRaster, FloodMetadata, FloodMode, FloodOverlay, OverlayRaster};

/// Encoded bytes above this are outside the representable height range
/// and never flood.
const MAX_FLOODABLE_BYTE: u8 = 250;

/// Base water color.
const WATER_RGB: [f32; 3] = [41.0, 128.0, 185.0];
/// Alert color blended in where flooded population is high.
const ALERT_RGB: [f32; 3] = [231.0, 76.0, 60.0];

/// Population density at which the alert blend saturates.
const POP_SATURATION: f32 = 100.0;
/// Density at or below which a flooded cell renders as ghost water.
const POP_GHOST_THRESHOLD: f32 = 1.0;
/// Alpha for flooded but effectively unpopulated cells.
const GHOST_ALPHA: u8 = 50;

/// Composites flood overlays from pre-encoded elevation rasters.
///
/// Holds at most one raster per [`FloodMode`] plus an optional
/// population density buffer on the same cell lattice. Rasters are
/// validated against the metadata when loaded, so `compose` itself is
/// infallible: anything it cannot draw comes back as
/// [`FloodOverlay::Empty`].
#[derive(Clone, Debug)]
pub struct FloodCompositor {
    meta: FloodMetadata,
    river: Option<ElevationRaster>,
    sea: Option<ElevationRaster>,
    population: Option<Vec<f32>>,
}

impl FloodCompositor {
    /// Create a compositor with no rasters loaded.
    pub fn new(meta: FloodMetadata) -> Self {
        Self {
            meta,
            river: None,
            sea: None,
            population: None,
        }
    }

    /// The metadata every overlay inherits its bounds from.
    pub fn metadata(&self) -> &FloodMetadata {
        &self.meta
    }

    /// Load or replace the elevation raster for one mode.
    pub fn set_elevation(
        &mut self,
        mode: FloodMode,
        raster: Option<ElevationRaster>,
    ) -> Result<(), ComputeError> {
        if let Some(ref r) = raster {
            r.validate(&self.meta)?;
        }
        match mode {
            FloodMode::River => self.river = raster,
            FloodMode::Sea => self.sea = raster,
        }
        Ok(())
    }

    /// Load or replace the population density buffer (row-major, same
    /// lattice as the elevation rasters).
    pub fn set_population(&mut self, population: Option<Vec<f32>>) -> Result<(), ComputeError> {
        if let Some(ref pop) = population {
            if pop.len() != self.meta.cell_count() {
                return Err(ComputeError::RasterShapeMismatch {
                    width: self.meta.width,
                    height: self.meta.height,
                    len: pop.len(),
                });
            }
        }
        self.population = population;
        Ok(())
    }

    /// Decode one elevation byte to metres.
    ///
    /// The encoding is quadratic so low elevations, where flood outcomes
    /// actually differ, get most of the byte range.
    pub fn decode_height_m(&self, encoded: u8) -> f32 {
        let ratio = f32::from(encoded) / 255.0;
        ratio * ratio * self.meta.max_height_m
    }

    /// Composite an overlay for a water level, in metres.
    ///
    /// A cell floods when its decoded height is at or below `level_m`.
    /// With `population_weighting` and a loaded population buffer the
    /// flooded color shifts toward the alert red and opacity grows with
    /// local density; flooded cells with essentially nobody in them
    /// render as faint ghost water instead. Without a population buffer
    /// the flag is ignored and opacity grades with flood depth. Levels at
    /// or below zero, and modes with no raster loaded, produce
    /// [`FloodOverlay::Empty`].
    pub fn compose(
        &self,
        level_m: f32,
        mode: FloodMode,
        population_weighting: bool,
    ) -> FloodOverlay {
        if level_m <= 0.0 {
            return FloodOverlay::Empty;
        }
        let raster = match mode {
            FloodMode::River => self.river.as_ref(),
            FloodMode::Sea => self.sea.as_ref(),
        };
        let Some(raster) = raster else {
            return FloodOverlay::Empty;
        };

        // Weighting needs the buffer; without one the depth ramp applies.
        let densities = if population_weighting {
            self.population.as_deref()
        } else {
            None
        };

        let cells = self.meta.cell_count();
        let mut pixels = vec![0u8; cells * 4];
        let mut flooded = 0usize;

        for i in 0..cells {
            let encoded = raster.encoded[i];
            if raster.land[i] == 0 || encoded > MAX_FLOODABLE_BYTE {
                continue;
            }
            let height_m = self.decode_height_m(encoded);
            if height_m > level_m {
                continue;
            }
            flooded += 1;

            let px = &mut pixels[i * 4..i * 4 + 4];
            if let Some(densities) = densities {
                let pop = densities[i];
                if pop > POP_GHOST_THRESHOLD {
                    let ratio = (pop / POP_SATURATION).min(1.0);
                    for (c, (base, alert)) in
                        px[..3].iter_mut().zip(WATER_RGB.iter().zip(&ALERT_RGB))
                    {
                        *c = (base + (alert - base) * ratio) as u8;
                    }
                    px[3] = (60.0 + ratio * 195.0).max(160.0) as u8;
                } else {
                    // Ghost water: flooded terrain nobody lives on.
                    px[0] = WATER_RGB[0] as u8;
                    px[1] = WATER_RGB[1] as u8;
                    px[2] = WATER_RGB[2] as u8;
                    px[3] = GHOST_ALPHA;
                }
            } else {
                // Depth-graded opacity, saturating 10 m under the surface.
                let depth_ratio = ((level_m - height_m) / 10.0).min(1.0);
                px[0] = WATER_RGB[0] as u8;
                px[1] = WATER_RGB[1] as u8;
                px[2] = WATER_RGB[2] as u8;
                px[3] = (100.0 + depth_ratio * 80.0) as u8;
            }
        }

        debug!(
            mode = ?mode,
            level_m,
            population_weighting,
            flooded,
            cells,
            "composited flood overlay"
        );
        FloodOverlay::Raster(OverlayRaster {
            pixels,
            width: self.meta.width,
            height: self.meta.height,
            bounds: self.meta.bounds,
        })
    }
}
