use core::fmt;

use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::IndexMap;
use itertools::Itertools;

use crate::cell::Cell;
use crate::error::PathError;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Records for every cell reached by a search the cell it was reached from. The start maps to
/// [None]. Entries keep the order in which cells were first discovered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    parents: FxIndexMap<Cell, Option<Cell>>,
}

impl PredecessorMap {
    /// A map holding only the start of a search.
    pub fn with_start(start: Cell) -> PredecessorMap {
        let mut map = PredecessorMap::default();
        map.parents.insert(start, None);
        map
    }

    /// Sets (or overwrites) the predecessor of `cell`.
    pub fn insert(&mut self, cell: Cell, parent: Cell) {
        self.parents.insert(cell, Some(parent));
    }

    /// `Some(None)` for the start, `Some(Some(parent))` for other reached cells and [None] for
    /// cells the search never reached.
    pub fn get(&self, cell: &Cell) -> Option<Option<Cell>> {
        self.parents.get(cell).copied()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.parents.contains_key(cell)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Reached cells in discovery order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.parents.keys()
    }
}

/// Walks the predecessor links back from `end` to the start and returns the cells in start to
/// end order. Fails when `end` was never reached.
pub fn reconstruct(predecessors: &PredecessorMap, end: Cell) -> Result<Path, PathError> {
    if !predecessors.contains(&end) {
        return Err(PathError::DisconnectedEnd(end));
    }
    let mut cells: Vec<Cell> =
        std::iter::successors(Some(end), |cell| predecessors.get(cell).flatten()).collect();
    cells.reverse();
    Ok(Path { cells })
}

/// An ordered sequence of cells from the start to the end of a maze, both included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// The cells strictly between start and end, which are the ones a renderer paints.
    pub fn interior(&self) -> &[Cell] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    /// Checks that every consecutive pair of cells shares an edge and that no cell repeats.
    pub fn is_contiguous(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.cells.iter().all(|cell| seen.insert(*cell))
            && self
                .cells
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_adjacent(b))
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells.iter().join(" -> "))
    }
}
