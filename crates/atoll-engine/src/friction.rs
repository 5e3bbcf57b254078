//! The per-cell travel-friction multiplier.

use atoll_core::{ConfigError, FrictionSettings, FrictionSource, GridSpec, Raster};
use tracing::debug;

/// Saturation point of the population density proxy: `sqrt(25) / 5 = 1`.
const POP_SATURATION: f64 = 5.0;

/// Off-road value in the road raster encoding (1.0 = best road).
const ROAD_WORST: f64 = 5.0;

enum Source<'a> {
    Uniform,
    Population(&'a Raster),
    Road(&'a Raster),
}

/// A per-cell multiplier (`>= 1.0`) describing travel difficulty.
///
/// Derived from either a population-density raster (dense areas approach
/// frictionless, sparse areas approach the road factor) or a road-class
/// raster (values 1.0–5.0 mapped linearly onto `[1, roadFactor]`). A
/// missing raster degrades to uniform friction 1.0 rather than failing.
pub struct FrictionField<'a> {
    spec: GridSpec,
    source: Source<'a>,
    road_factor: f64,
}

impl<'a> FrictionField<'a> {
    /// Build the field for one computation.
    ///
    /// `road_factor` is inflated by the disabled-road-class penalties when
    /// the population source is selected (see
    /// [`FrictionSettings::effective_road_factor`]).
    pub fn build(
        spec: GridSpec,
        settings: &FrictionSettings,
        population: Option<&'a Raster>,
        roads: Option<&'a Raster>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let road_factor = settings.effective_road_factor();
        let source = match settings.source {
            FrictionSource::Population => match population {
                Some(r) => Source::Population(r),
                None => Source::Uniform,
            },
            FrictionSource::RoadRaster => match roads {
                Some(r) => Source::Road(r),
                None => Source::Uniform,
            },
        };
        let source = if road_factor == 1.0 {
            // Factor 1.0 collapses every formula to 1.0; skip the sampling.
            Source::Uniform
        } else {
            source
        };
        debug!(
            road_factor,
            uniform = matches!(source, Source::Uniform),
            "friction field built"
        );
        Ok(Self {
            spec,
            source,
            road_factor,
        })
    }

    /// The road factor after disabled-class penalties.
    pub fn effective_road_factor(&self) -> f64 {
        self.road_factor
    }

    /// Friction multiplier at cell `(row, col)`. Always `>= 1.0`.
    pub fn friction_at(&self, row: usize, col: usize) -> f64 {
        match &self.source {
            Source::Uniform => 1.0,
            Source::Population(raster) => {
                let (lat, lon) = self.spec.cell_center(row, col);
                // Cells outside the raster count as unpopulated.
                let v = raster.sample(lat, lon).unwrap_or(0.0).max(0.0) as f64;
                let pop_ratio = (v.sqrt() / POP_SATURATION).min(1.0);
                1.0 + (self.road_factor - 1.0) * (1.0 - pop_ratio)
            }
            Source::Road(raster) => {
                let (lat, lon) = self.spec.cell_center(row, col);
                // Cells outside the raster count as off-road.
                let v = (raster.sample(lat, lon).unwrap_or(ROAD_WORST as f32) as f64)
                    .clamp(1.0, ROAD_WORST);
                1.0 + (v - 1.0) * (self.road_factor - 1.0) / (ROAD_WORST - 1.0)
            }
        }
    }
}
