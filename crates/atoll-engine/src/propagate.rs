//! Friction-weighted multi-source shortest-path propagation.

use crate::friction::FrictionField;
use crate::scratch::{FrontierEntry, PropagationScratch};
use atoll_core::GridSpec;

/// All 8 neighbour offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Classic label-setting shortest path (Dijkstra) over the 8-connected
/// grid graph, flooded from every seed cell at cost zero.
///
/// Edge cost from a settled cell to a neighbour is the metric step
/// distance for the direction (N/S, E/W, or their Euclidean diagonal
/// combination) times the friction at the neighbour. Propagation never
/// relaxes past `max_scan_m`, bounding the run to roughly the region
/// within the configured range.
///
/// `on_settle` is invoked exactly once per settled cell with its final
/// cost, in non-decreasing cost order; accumulating the decay
/// contribution there avoids a second full-grid pass.
///
/// `scratch` must already be reset and sized for `spec.cell_count()`;
/// per-category runs share it without leaking state into each other.
pub fn propagate(
    spec: &GridSpec,
    seeds: impl IntoIterator<Item = usize>,
    friction: &FrictionField<'_>,
    max_scan_m: f64,
    scratch: &mut PropagationScratch,
    mut on_settle: impl FnMut(usize, f64),
) {
    let width = spec.width() as i32;
    let height = spec.height() as i32;
    let (dy, dx, diag) = spec.step_distances_m();
    let step_for = |dr: i32, dc: i32| -> f64 {
        match (dr, dc) {
            (0, _) => dx,
            (_, 0) => dy,
            _ => diag,
        }
    };

    for cell in seeds {
        scratch.cost[cell] = 0.0;
        scratch.frontier.push(FrontierEntry {
            cost: 0.0,
            cell: cell as u32,
        });
    }

    while let Some(FrontierEntry { cost, cell }) = scratch.frontier.pop() {
        let cell = cell as usize;
        if scratch.settled[cell] {
            continue; // stale frontier entry
        }
        scratch.settled[cell] = true;
        on_settle(cell, cost);

        let row = (cell / spec.width()) as i32;
        let col = (cell % spec.width()) as i32;
        for (dr, dc) in OFFSETS_8 {
            let nr = row + dr;
            let nc = col + dc;
            if nr < 0 || nr >= height || nc < 0 || nc >= width {
                continue;
            }
            let n = (nr as usize) * spec.width() + nc as usize;
            if scratch.settled[n] {
                continue;
            }
            let tentative =
                cost + step_for(dr, dc) * friction.friction_at(nr as usize, nc as usize);
            if tentative < scratch.cost[n] && tentative <= max_scan_m {
                scratch.cost[n] = tentative;
                scratch.frontier.push(FrontierEntry {
                    cost: tentative,
                    cell: n as u32,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_core::{FrictionSettings, GeoBounds, GridSpec};

    fn spec() -> GridSpec {
        let b = GeoBounds::new(-20.3, -20.1, 57.4, 57.6).unwrap();
        GridSpec::new(b, 0.002).unwrap()
    }

    fn frictionless(spec: GridSpec) -> FrictionField<'static> {
        FrictionField::build(spec, &FrictionSettings::frictionless(), None, None).unwrap()
    }

    fn run(
        spec: &GridSpec,
        seeds: &[usize],
        max_scan_m: f64,
    ) -> Vec<(usize, f64)> {
        let friction = frictionless(*spec);
        let mut scratch = PropagationScratch::new(spec.cell_count());
        scratch.reset();
        let mut settled = Vec::new();
        propagate(spec, seeds.iter().copied(), &friction, max_scan_m, &mut scratch, |c, d| {
            settled.push((c, d))
        });
        settled
    }

    #[test]
    fn seed_settles_at_zero_cost() {
        let s = spec();
        let seed = s.index(50, 50);
        let settled = run(&s, &[seed], 1000.0);
        assert_eq!(settled[0], (seed, 0.0));
    }

    #[test]
    fn settle_order_is_nondecreasing_cost() {
        let s = spec();
        let settled = run(&s, &[s.index(50, 50)], 3000.0);
        for w in settled.windows(2) {
            assert!(w[0].1 <= w[1].1);
        }
    }

    #[test]
    fn each_cell_settles_once() {
        let s = spec();
        let settled = run(&s, &[s.index(50, 50), s.index(50, 52)], 2000.0);
        let mut cells: Vec<usize> = settled.iter().map(|&(c, _)| c).collect();
        cells.sort_unstable();
        let before = cells.len();
        cells.dedup();
        assert_eq!(cells.len(), before);
    }

    #[test]
    fn axis_neighbour_cost_is_step_distance() {
        let s = spec();
        let (dy, dx, diag) = s.step_distances_m();
        let settled = run(&s, &[s.index(50, 50)], 1000.0);
        let cost_of = |cell: usize| settled.iter().find(|&&(c, _)| c == cell).unwrap().1;
        assert!((cost_of(s.index(51, 50)) - dy).abs() < 1e-9);
        assert!((cost_of(s.index(50, 51)) - dx).abs() < 1e-9);
        assert!((cost_of(s.index(51, 51)) - diag).abs() < 1e-9);
    }

    #[test]
    fn no_cell_settles_beyond_max_scan() {
        let s = spec();
        let max_scan = 1500.0;
        let settled = run(&s, &[s.index(50, 50)], max_scan);
        assert!(settled.iter().all(|&(_, d)| d <= max_scan));
        // And the scan actually stopped well short of the full grid.
        assert!(settled.len() < s.cell_count());
    }

    #[test]
    fn multi_source_takes_nearest_seed() {
        let s = spec();
        let a = s.index(30, 30);
        let b = s.index(70, 70);
        let settled = run(&s, &[a, b], 5000.0);
        let (dy, _, _) = s.step_distances_m();
        // A cell one row above seed b is closer to b than to a.
        let probe = s.index(71, 70);
        let cost = settled.iter().find(|&&(c, _)| c == probe).unwrap().1;
        assert!((cost - dy).abs() < 1e-9);
    }

    #[test]
    fn no_seeds_settles_nothing() {
        let s = spec();
        let settled = run(&s, &[], 1000.0);
        assert!(settled.is_empty());
    }

    #[test]
    fn grid_distance_dominates_euclidean() {
        // Octile paths can only overestimate the straight-line metric.
        let s = spec();
        let seed = s.index(50, 50);
        let settled = run(&s, &[seed], 4000.0);
        let (slat, slon) = s.cell_center(50, 50);
        for &(cell, cost) in &settled {
            let (lat, lon) = s.cell_center(cell / s.width(), cell % s.width());
            let euclid = atoll_core::geo::distance_m(slat, slon, lat, lon);
            // Step distances are evaluated at the region's mean latitude,
            // so allow a small relative slack against the exact metric.
            assert!(cost >= euclid * 0.995 - 1e-6, "cost {cost} < euclid {euclid}");
        }
    }
}
