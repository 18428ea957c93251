use core::fmt;
use std::ops::Add;

use grid_util::point::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid position addressed by row and column. Coordinates are signed so that the
/// neighbour of a border cell can be formed and then rejected by a bounds check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Number of unit moves needed to reach `other` on an open 4-connected grid.
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        Point::from(*self).manhattan_distance(&Point::from(*other))
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four axis-aligned neighbours in search order: up, down, left, right. Bounds are not
    /// checked here.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        NEUMANN_OFFSETS.map(|delta| *self + delta)
    }
}

/// Offsets for up, down, left and right. The order fixes tie-breaking in both solvers.
const NEUMANN_OFFSETS: [Cell; 4] = [
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(0, 1),
];

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Columns run along x and rows along y.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What occupies a cell of the maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Wall,
}

impl CellState {
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Single character used when printing a grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Wall => '#',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CellState::Empty => "empty",
            CellState::Start => "start",
            CellState::End => "end",
            CellState::Wall => "wall",
        };
        f.write_str(name)
    }
}
