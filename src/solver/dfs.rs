use fxhash::FxHashSet;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::path::PredecessorMap;
use crate::solver::GridSolver;

/// How [DepthFirstSolver] decides which parent a cell keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DfsMode {
    /// Cells are marked visited when popped. An unvisited cell can be pushed by several parents
    /// and every push overwrites its predecessor, so the last push before the first pop wins.
    #[default]
    LastPush,
    /// Cells are marked visited when pushed and are pushed at most once, so the first parent
    /// to discover a cell keeps it.
    FirstPush,
}

/// Depth-first search using an explicit stack. Returns some path, usually not a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver {
    pub mode: DfsMode,
}

impl DepthFirstSolver {
    pub fn new(mode: DfsMode) -> DepthFirstSolver {
        DepthFirstSolver { mode }
    }

    fn search_last_push(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap {
        let mut predecessors = PredecessorMap::with_start(start);
        let mut visited = FxHashSet::default();
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            if cell == end {
                debug!("DFS reached {} after visiting {} cells", end, visited.len());
                return predecessors;
            }
            if !visited.insert(cell) {
                continue;
            }
            for neighbor in grid.passable_neighbors(cell) {
                if !visited.contains(&neighbor) {
                    predecessors.insert(neighbor, cell);
                    stack.push(neighbor);
                }
            }
        }
        debug!(
            "DFS emptied its stack after visiting {} cells without reaching {}",
            visited.len(),
            end
        );
        predecessors
    }

    fn search_first_push(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap {
        let mut predecessors = PredecessorMap::with_start(start);
        let mut discovered = FxHashSet::default();
        discovered.insert(start);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            if cell == end {
                debug!("DFS reached {} after discovering {} cells", end, discovered.len());
                return predecessors;
            }
            for neighbor in grid.passable_neighbors(cell) {
                if discovered.insert(neighbor) {
                    predecessors.insert(neighbor, cell);
                    stack.push(neighbor);
                }
            }
        }
        debug!(
            "DFS emptied its stack after discovering {} cells without reaching {}",
            discovered.len(),
            end
        );
        predecessors
    }
}

impl GridSolver for DepthFirstSolver {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap {
        match self.mode {
            DfsMode::LastPush => self.search_last_push(grid, start, end),
            DfsMode::FirstPush => self.search_first_push(grid, start, end),
        }
    }
}
