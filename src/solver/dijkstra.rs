use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use log::debug;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::path::PredecessorMap;
use crate::solver::GridSolver;

/// Uniform-cost search. Every move costs one, so the first time a cell leaves the queue its
/// distance is final.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

struct SmallestCostHolder {
    cost: u32,
    order: u64,
    cell: Cell,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.order == other.order
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest cost wins, and among equal costs the entry
        // pushed first wins.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

impl GridSolver for DijkstraSolver {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap {
        let mut predecessors = PredecessorMap::with_start(start);
        let mut distances: FxHashMap<Cell, u32> = FxHashMap::default();
        distances.insert(start, 0);
        let mut to_see = BinaryHeap::new();
        let mut order = 0;
        to_see.push(SmallestCostHolder {
            cost: 0,
            order,
            cell: start,
        });
        let mut settled = 0usize;
        while let Some(SmallestCostHolder { cost, cell, .. }) = to_see.pop() {
            if cell == end {
                debug!("Dijkstra reached {} after settling {} cells", end, settled);
                return predecessors;
            }
            // A cell may sit in the heap several times if a shorter way to it was found after
            // it was pushed. Only the entry matching the recorded distance is expanded.
            if distances.get(&cell).is_some_and(|&best| cost > best) {
                continue;
            }
            settled += 1;
            let new_cost = cost + 1;
            for neighbor in grid.passable_neighbors(cell) {
                let improves = distances
                    .get(&neighbor)
                    .map_or(true, |&known| new_cost < known);
                if improves {
                    distances.insert(neighbor, new_cost);
                    predecessors.insert(neighbor, cell);
                    order += 1;
                    to_see.push(SmallestCostHolder {
                        cost: new_cost,
                        order,
                        cell: neighbor,
                    });
                }
            }
        }
        debug!(
            "Dijkstra exhausted the queue after settling {} cells without reaching {}",
            settled, end
        );
        predecessors
    }
}
