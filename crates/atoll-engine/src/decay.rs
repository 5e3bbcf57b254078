//! Distance-decay contribution functions.
//!
//! A settled distance `d` (metres) and a category range `R` map to a
//! contribution in `[0, 1]`:
//!
//! - constant: `1` if `d < R`, else `0`
//! - linear: `1 - d/R` for `d < R`, else `0`
//! - exponential: `exp(-d/R)`, no hard cutoff
//!
//! The exponential time constant is the category range itself; the
//! propagation's early termination bounds its tail. Contributions from
//! different categories sum into the score grid.

use atoll_core::DecayKind;

/// Contribution of a settled distance under the given decay kind.
///
/// `range_m` must be positive; zero-range categories are excluded at
/// configuration time and never reach this function.
pub fn contribution(kind: DecayKind, distance_m: f64, range_m: f64) -> f64 {
    debug_assert!(range_m > 0.0);
    match kind {
        DecayKind::Constant => {
            if distance_m < range_m {
                1.0
            } else {
                0.0
            }
        }
        DecayKind::Linear => {
            if distance_m < range_m {
                1.0 - distance_m / range_m
            } else {
                0.0
            }
        }
        DecayKind::Exponential => (-distance_m / range_m).exp(),
    }
}
