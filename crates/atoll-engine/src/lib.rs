//! The Atoll accessibility scoring engine.
//!
//! Computes a spatial accessibility surface: the bounded region described
//! by a [`GridSpec`](atoll_core::GridSpec) is rasterized into a uniform
//! grid and each cell receives a score reflecting proximity-weighted
//! reachability to the active POI categories, under a friction-adjusted
//! travel-cost model.
//!
//! The pipeline per computation:
//!
//! 1. build (or default) the [`FrictionField`] from the configured source,
//! 2. for each active category, run the multi-source shortest-path
//!    propagation ([`propagate`]) from every POI cell, accumulating the
//!    decay contribution of each settled cell,
//! 3. take the exact maximum over the score grid,
//! 4. derive the land mask by dilating the populated cells.
//!
//! One computation owns its scratch buffers; they are reset, not
//! reallocated, between category runs and never escape the invocation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod decay;
mod engine;
mod friction;
mod landmask;
mod propagate;
mod render;
mod scratch;

pub use engine::{AccessibilityEngine, ComputeRequest, ScoreGrid};
pub use friction::FrictionField;
pub use landmask::{derive_land_mask, dilate_square, DILATION_RADIUS_CELLS};
pub use propagate::propagate;
pub use render::render_rgba;
pub use scratch::PropagationScratch;
