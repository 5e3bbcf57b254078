//! Flood-risk overlay compositing.
//!
//! An independent raster pipeline, sharing only the geographic-bounds
//! concept with the accessibility engine: pre-encoded elevation buffers
//! are decoded, compared against a requested water level, and composited
//! into a colored RGBA overlay, optionally weighted by population.
//!
//! Elevation uses a quadratic ("sqrt") encoding chosen to give finer
//! resolution near sea level: an encoded byte `r` decodes to
//! `(r / 255)^2 * max_height` metres. Cells flagged as ocean, or with
//! `r > 250` (above the encodable range), are never floodable.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod compositor;
mod types;

pub use compositor::FloodCompositor;
pub use types::{ElevationRaster, FloodMetadata, FloodMode, FloodOverlay, OverlayRaster};
