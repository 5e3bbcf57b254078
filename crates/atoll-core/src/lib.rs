//! Core types for the Atoll spatial accessibility engine.
//!
//! Everything here is a plain value type: geographic bounds, the raster
//! grid specification, dense row-major grid buffers, input rasters, and
//! the configuration structs the engine consumes. No component in this
//! crate allocates scratch state or runs algorithms; that lives in
//! `atoll-engine` and `atoll-flood`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bounds;
mod config;
mod error;
pub mod geo;
mod grid;
mod raster;

pub use bounds::GeoBounds;
pub use config::{
    CategoryConfig, DecayKind, DecaySettings, FrictionSettings, FrictionSource, RoadClass,
};
pub use error::{ComputeError, ConfigError};
pub use grid::{Grid, GridSpec};
pub use raster::Raster;
