//! Land/ocean mask derivation.
//!
//! A cell is "populated" iff its population value is strictly positive;
//! the land mask is the populated set dilated by a square structuring
//! element. The mask suppresses score display in open ocean far from any
//! settlement, independent of whether the score itself is zero there.

use atoll_core::{GridSpec, Raster};

/// Dilation radius in cells. At ~200 m cells this is about 2 km.
pub const DILATION_RADIUS_CELLS: usize = 10;

/// Dilate a boolean mask with a square structuring element of the given
/// radius: a cell is set iff it or any cell within `radius` rows *and*
/// `radius` columns is set.
///
/// The square window is separable, so this runs as a horizontal pass
/// followed by a vertical pass.
pub fn dilate_square(mask: &[bool], width: usize, height: usize, radius: usize) -> Vec<bool> {
    debug_assert_eq!(mask.len(), width * height);
    if radius == 0 {
        return mask.to_vec();
    }

    let mut rows = vec![false; mask.len()];
    for r in 0..height {
        let base = r * width;
        for c in 0..width {
            let lo = c.saturating_sub(radius);
            let hi = (c + radius).min(width - 1);
            rows[base + c] = mask[base + lo..=base + hi].iter().any(|&v| v);
        }
    }

    let mut out = vec![false; mask.len()];
    for c in 0..width {
        for r in 0..height {
            let lo = r.saturating_sub(radius);
            let hi = (r + radius).min(height - 1);
            out[r * width + c] = (lo..=hi).any(|rr| rows[rr * width + c]);
        }
    }
    out
}

/// Derive the land mask for a score grid.
///
/// Without a population raster every cell defaults to land; the mask then
/// never suppresses anything.
pub fn derive_land_mask(spec: &GridSpec, population: Option<&Raster>) -> Vec<bool> {
    let Some(pop) = population else {
        return vec![true; spec.cell_count()];
    };

    let mut populated = vec![false; spec.cell_count()];
    for row in 0..spec.height() {
        for col in 0..spec.width() {
            let (lat, lon) = spec.cell_center(row, col);
            populated[spec.index(row, col)] = pop.sample(lat, lon).unwrap_or(0.0) > 0.0;
        }
    }
    dilate_square(&populated, spec.width(), spec.height(), DILATION_RADIUS_CELLS)
}
