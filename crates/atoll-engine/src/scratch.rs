//! Reusable scratch buffers for the cost propagation.
//!
//! One computation owns one [`PropagationScratch`]; it is reset between
//! category runs rather than reallocated, so large grids pay the
//! allocation cost once per computation, not once per category. The
//! buffers never escape the invocation that owns them.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry keyed by tentative cumulative cost.
///
/// Ordered as a min-heap on cost (ties broken by cell index for
/// determinism) so it can live in `std`'s max-oriented [`BinaryHeap`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub cost: f64,
    pub cell: u32,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Scratch state for one computation: cost grid, settled flags, frontier.
pub struct PropagationScratch {
    pub(crate) cost: Vec<f64>,
    pub(crate) settled: Vec<bool>,
    pub(crate) frontier: BinaryHeap<FrontierEntry>,
}

impl PropagationScratch {
    /// Allocate scratch for a grid of `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            cost: vec![f64::INFINITY; cell_count],
            settled: vec![false; cell_count],
            frontier: BinaryHeap::new(),
        }
    }

    /// Grow to `cell_count` if the grid changed; no-op otherwise.
    pub fn ensure_capacity(&mut self, cell_count: usize) {
        if self.cost.len() != cell_count {
            self.cost = vec![f64::INFINITY; cell_count];
            self.settled = vec![false; cell_count];
            self.frontier = BinaryHeap::new();
        }
    }

    /// Reset all state for the next category run. Keeps allocations.
    pub fn reset(&mut self) {
        self.cost.fill(f64::INFINITY);
        self.settled.fill(false);
        self.frontier.clear();
    }
}
