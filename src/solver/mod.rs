use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::path::{reconstruct, Path, PredecessorMap};

pub mod dfs;
pub mod dijkstra;

use dfs::{DepthFirstSolver, DfsMode};
use dijkstra::DijkstraSolver;

/// A search over a [Grid] that reports how each reached cell was reached. Solvers differ in
/// traversal order only; the output is always a [PredecessorMap] rooted at `start`.
pub trait GridSolver {
    /// Searches from `start` until `end` is settled or no cells remain. `end` is present in the
    /// returned map exactly when it was reached.
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap;

    /// Runs [search](Self::search) and turns the result into a [Path] if `end` was reached.
    fn get_path_single_goal(&self, grid: &Grid, start: Cell, end: Cell) -> Option<Path> {
        let predecessors = self.search(grid, start, end);
        reconstruct(&predecessors, end).ok()
    }
}

impl<S: GridSolver + ?Sized> GridSolver for Box<S> {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> PredecessorMap {
        (**self).search(grid, start, end)
    }
}

/// The search strategies a session can be solved with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Dijkstra's algorithm on unit edge costs, returns a shortest path.
    UniformCost,
    /// Stack based depth-first search, returns some path.
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::UniformCost, Algorithm::DepthFirst];

    /// Builds the solver for this algorithm. `dfs_mode` only affects [Algorithm::DepthFirst].
    pub fn solver(self, dfs_mode: DfsMode) -> Box<dyn GridSolver> {
        match self {
            Algorithm::UniformCost => Box::new(DijkstraSolver),
            Algorithm::DepthFirst => Box::new(DepthFirstSolver::new(dfs_mode)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::UniformCost => f.write_str("Dijkstra"),
            Algorithm::DepthFirst => f.write_str("DFS"),
        }
    }
}
