//! Point sets and the per-category nearest-neighbour index.
//!
//! A [`PointSet`] is the raw, ordered list of geocoded points of interest
//! for one category, supplied read-only by the collaborator layer. A
//! [`PointIndex`] is built once per point set and cached; it answers
//! "all points within a radius" and "distance to the nearest point"
//! queries, and enumerates its points for seeding the cost propagation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod index;
mod point;

pub use index::PointIndex;
pub use point::{Point, PointSet};
