//! The accessibility computation orchestrator.

use crate::decay;
use crate::friction::FrictionField;
use crate::landmask::derive_land_mask;
use crate::propagate::propagate;
use crate::scratch::PropagationScratch;
use atoll_core::{
    CategoryConfig, ComputeError, DecaySettings, FrictionSettings, Grid, GridSpec, Raster,
};
use atoll_index::{PointIndex, PointSet};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// One accessibility computation request.
///
/// Categories are keyed by label; iteration order (and therefore
/// accumulation order) follows insertion order.
#[derive(Clone, Debug)]
pub struct ComputeRequest {
    /// Per-category inclusion and range settings.
    pub categories: IndexMap<String, CategoryConfig>,
    /// Decay function shared by all categories.
    pub decay: DecaySettings,
    /// Travel-friction configuration.
    pub friction: FrictionSettings,
}

/// The result of one accessibility computation.
#[derive(Clone, Debug)]
pub struct ScoreGrid {
    /// Per-cell accumulated scores. Every value is `>= 0`.
    pub values: Grid<f32>,
    /// Exact maximum over `values`, for display normalization.
    pub max_score: f32,
    /// Cells eligible for display (land, or near settlement).
    pub land_mask: Grid<bool>,
}

impl ScoreGrid {
    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.values.spec().width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.values.spec().height()
    }
}

/// The accessibility engine: owns the grid spec, the cached per-category
/// point indices, the optional input rasters, and the scratch arena.
///
/// Synchronous and single-invocation: a computation runs to completion on
/// the calling thread, and the engine must not be invoked concurrently
/// with itself. A caller issuing a new request is responsible for
/// discarding the superseded result.
pub struct AccessibilityEngine {
    spec: GridSpec,
    indices: IndexMap<String, PointIndex>,
    population: Option<Raster>,
    road_friction: Option<Raster>,
    scratch: PropagationScratch,
}

impl AccessibilityEngine {
    /// Create an engine for the given grid.
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            indices: IndexMap::new(),
            population: None,
            road_friction: None,
            scratch: PropagationScratch::new(spec.cell_count()),
        }
    }

    /// The grid spec computations rasterize against.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Install or replace the population raster (friction source and land
    /// mask input). `None` clears it.
    pub fn set_population(&mut self, raster: Option<Raster>) -> Result<(), ComputeError> {
        if let Some(r) = &raster {
            r.validate()?;
        }
        self.population = raster;
        Ok(())
    }

    /// Install or replace the road-friction raster. `None` clears it.
    pub fn set_road_friction(&mut self, raster: Option<Raster>) -> Result<(), ComputeError> {
        if let Some(r) = &raster {
            r.validate()?;
        }
        self.road_friction = raster;
        Ok(())
    }

    /// Install or rebuild the index for one category from its point set.
    ///
    /// The index is cached and reused across computations until the
    /// backing point set changes.
    pub fn set_point_set(&mut self, label: impl Into<String>, set: &PointSet) {
        self.indices.insert(label.into(), PointIndex::build(set));
    }

    /// Drop a category's index entirely.
    pub fn remove_point_set(&mut self, label: &str) {
        self.indices.shift_remove(label);
    }

    /// Metric distance from a point to the nearest POI of a category, or
    /// `None` when the category is unknown or has no point within the
    /// coarse search radius.
    pub fn nearest_distance_m(&self, label: &str, lat: f64, lon: f64) -> Option<f64> {
        self.indices.get(label)?.nearest_distance_m(lat, lon)
    }

    /// Run one full accessibility computation.
    ///
    /// Categories that are excluded, have zero range, or have a missing
    /// or empty point set contribute nothing, bit-for-bit identical to
    /// the category being absent. Missing rasters degrade to uniform
    /// friction and an all-land mask. Malformed friction settings fail
    /// before any propagation starts.
    pub fn compute(&mut self, request: &ComputeRequest) -> Result<ScoreGrid, ComputeError> {
        request.friction.validate()?;
        let friction = FrictionField::build(
            self.spec,
            &request.friction,
            self.population.as_ref(),
            self.road_friction.as_ref(),
        )?;

        let cell_count = self.spec.cell_count();
        self.scratch.ensure_capacity(cell_count);
        let mut score = vec![0.0f32; cell_count];

        let kind = request.decay.kind;
        let scan_multiplier = kind.scan_multiplier();

        for (label, cfg) in &request.categories {
            if !cfg.is_active() {
                trace!(%label, "category inactive, skipped");
                continue;
            }
            let Some(index) = self.indices.get(label) else {
                trace!(%label, "no point set loaded, skipped");
                continue;
            };
            if index.is_empty() {
                trace!(%label, "empty point set, skipped");
                continue;
            }

            let seeds: Vec<usize> = index
                .points()
                .iter()
                .filter_map(|p| self.spec.cell_containing(p.lat, p.lon))
                .map(|(row, col)| self.spec.index(row, col))
                .collect();
            if seeds.is_empty() {
                trace!(%label, "all points outside the grid, skipped");
                continue;
            }

            let range_m = cfg.range_m();
            let max_scan_m = range_m * friction.effective_road_factor() * scan_multiplier;
            debug!(%label, seeds = seeds.len(), range_m, max_scan_m, "propagating category");

            self.scratch.reset();
            propagate(
                &self.spec,
                seeds,
                &friction,
                max_scan_m,
                &mut self.scratch,
                |cell, distance_m| {
                    score[cell] += decay::contribution(kind, distance_m, range_m) as f32;
                },
            );
        }

        let max_score = score.iter().copied().fold(0.0f32, f32::max);
        let land_mask = derive_land_mask(&self.spec, self.population.as_ref());
        debug!(max_score, "computation finished");

        Ok(ScoreGrid {
            values: Grid::from_values(self.spec, score),
            max_score,
            land_mask: Grid::from_values(self.spec, land_mask),
        })
    }
}
