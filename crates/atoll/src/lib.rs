//! Atoll: spatial accessibility scoring for island-scale regions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Atoll sub-crates. For most users, adding `atoll` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use atoll::prelude::*;
//!
//! // A ~22 km square coastal region at ~222 m cells.
//! let bounds = GeoBounds::new(-20.4, -20.2, 57.4, 57.6).unwrap();
//! let spec = GridSpec::new(bounds, 0.002).unwrap();
//!
//! // One clinic at a known cell.
//! let (lat, lon) = spec.cell_center(50, 50);
//! let mut engine = AccessibilityEngine::new(spec);
//! engine.set_point_set("clinics", &PointSet::from_triples(vec![(lat, lon, 1)]));
//!
//! let request = ComputeRequest {
//!     categories: [(
//!         "clinics".to_string(),
//!         CategoryConfig { included: true, range_km: 5.0 },
//!     )]
//!     .into_iter()
//!     .collect(),
//!     decay: DecaySettings::new(DecayKind::Linear),
//!     friction: FrictionSettings::frictionless(),
//! };
//! let scores = engine.compute(&request).unwrap();
//!
//! // The clinic's own cell scores a full contribution.
//! assert_eq!(*scores.values.get(50, 50), 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `atoll-core` | Bounds, grid spec, rasters, configuration, errors |
//! | [`index`] | `atoll-index` | Point sets and the bucketed nearest-point index |
//! | [`engine`] | `atoll-engine` | Friction, cost propagation, decay scoring, rendering |
//! | [`flood`] | `atoll-flood` | Flood overlay compositing from encoded elevation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bounds, grid spec, rasters, configuration, and errors (`atoll-core`).
pub use atoll_core as core;

/// Point sets and the bucketed nearest-point index (`atoll-index`).
///
/// [`index::PointIndex`] answers radius and nearest-distance queries and
/// seeds the cost propagation.
pub use atoll_index as index;

/// The scoring engine (`atoll-engine`).
///
/// [`engine::AccessibilityEngine`] owns the per-category indices and
/// friction rasters and produces [`engine::ScoreGrid`] surfaces;
/// [`engine::render_rgba`] turns one into a heatmap image buffer.
pub use atoll_engine as engine;

/// Flood overlay compositing (`atoll-flood`).
///
/// [`flood::FloodCompositor`] decodes pre-encoded elevation rasters and
/// composites water-level overlays, independent of the scoring pipeline.
pub use atoll_flood as flood;

/// Common imports for typical Atoll usage.
///
/// ```rust
/// use atoll::prelude::*;
/// ```
pub mod prelude {
    // Geography and grids
    pub use atoll_core::{GeoBounds, Grid, GridSpec, Raster};

    // Configuration
    pub use atoll_core::{
        CategoryConfig, DecayKind, DecaySettings, FrictionSettings, FrictionSource, RoadClass,
    };

    // Errors
    pub use atoll_core::{ComputeError, ConfigError};

    // Points
    pub use atoll_index::{Point, PointIndex, PointSet};

    // Engine
    pub use atoll_engine::{render_rgba, AccessibilityEngine, ComputeRequest, ScoreGrid};

    // Flood
    pub use atoll_flood::{
        ElevationRaster, FloodCompositor, FloodMetadata, FloodMode, FloodOverlay, OverlayRaster,
    };
}
