use core::fmt;

use grid_util::grid::{Grid as _, SimpleGrid};
use grid_util::point::Point;
use log::debug;

use crate::cell::{Cell, CellState};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::GridError;

/// [Grid] stores the [CellState] of every cell of a maze in a [SimpleGrid] together with the
/// positions of the start and end cells. Columns map to x and rows to y.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<CellState>,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl Grid {
    /// Creates an all-empty grid. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid::empty(rows, cols))
    }

    fn empty(rows: usize, cols: usize) -> Grid {
        Grid {
            cells: SimpleGrid::new(cols, rows, CellState::Empty),
            start: None,
            end: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.cells.point_in_bounds(Point::from(cell))
    }

    fn check_bounds(&self, cell: Cell) -> Result<Point, GridError> {
        if self.in_bounds(cell) {
            Ok(Point::from(cell))
        } else {
            Err(GridError::InvalidCell {
                cell,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn get_cell(&self, cell: Cell) -> Result<CellState, GridError> {
        let point = self.check_bounds(cell)?;
        Ok(self.cells.get_point(point))
    }

    /// Places `state` on an empty cell. Every cell is set at most once between clears: a
    /// non-empty target is rejected and the grid is left untouched. Only one start and one end
    /// may exist at a time.
    pub fn set_cell(&mut self, cell: Cell, state: CellState) -> Result<(), GridError> {
        let point = self.check_bounds(cell)?;
        let current = self.cells.get_point(point);
        if !current.is_empty() {
            return Err(GridError::AlreadyOccupied {
                cell,
                state: current,
            });
        }
        match state {
            CellState::Empty => return Err(GridError::InvalidState),
            CellState::Start => {
                if let Some(existing) = self.start {
                    return Err(GridError::DuplicateEndpoint { state, existing });
                }
                self.start = Some(cell);
            }
            CellState::End => {
                if let Some(existing) = self.end {
                    return Err(GridError::DuplicateEndpoint { state, existing });
                }
                self.end = Some(cell);
            }
            CellState::Wall => {}
        }
        self.cells.set_point(point, state);
        debug!("Set {} to {}", cell, state);
        Ok(())
    }

    /// Returns every cell to empty and forgets the endpoints.
    pub fn clear(&mut self) {
        self.cells.values.fill(CellState::Empty);
        self.start = None;
        self.end = None;
    }

    /// True when the cell is inside the grid and not a wall.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells.get_point(Point::from(cell)) != CellState::Wall
    }

    /// The in-bounds axis-aligned neighbours of `cell` in the order up, down, left, right.
    /// Walls are included; use [is_passable](Self::is_passable) to filter them.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// The neighbours of `cell` a search may step onto, in search order.
    pub fn passable_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(move |n| self.is_passable(*n))
    }

    /// Every cell of the grid in row-major order.
    fn positions(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols() as i32;
        (0..self.rows() as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.positions()
            .filter(|cell| self.cells.get_point(Point::from(*cell)) == CellState::Wall)
    }

    pub fn wall_count(&self) -> usize {
        self.cells
            .values
            .iter()
            .filter(|state| **state == CellState::Wall)
            .count()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.values.chunks(self.cols()) {
            let line: String = row.iter().map(|state| state.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Grid) -> bool {
        self.rows() == other.rows()
            && self.cols() == other.cols()
            && self.cells.values == other.cells.values
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::grid::Grid as _;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 4).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 4 }
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = Grid::new(3, 3).unwrap();
        let outside = Cell::new(3, 0);
        assert!(matches!(
            grid.get_cell(outside),
            Err(GridError::InvalidCell { .. })
        ));
        assert!(matches!(
            grid.set_cell(Cell::new(0, -1), CellState::Wall),
            Err(GridError::InvalidCell { .. })
        ));
    }

    #[test]
    fn second_set_on_same_cell_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        let cell = Cell::new(1, 1);
        grid.set_cell(cell, CellState::Wall).unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.set_cell(cell, CellState::Wall),
            Err(GridError::AlreadyOccupied {
                cell,
                state: CellState::Wall
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn only_one_start_and_end() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(Cell::new(0, 0), CellState::Start).unwrap();
        grid.set_cell(Cell::new(2, 2), CellState::End).unwrap();
        assert_eq!(
            grid.set_cell(Cell::new(1, 0), CellState::Start),
            Err(GridError::DuplicateEndpoint {
                state: CellState::Start,
                existing: Cell::new(0, 0)
            })
        );
        assert_eq!(grid.get_cell(Cell::new(1, 0)), Ok(CellState::Empty));
        assert_eq!(
            grid.set_cell(Cell::new(1, 0), CellState::Empty),
            Err(GridError::InvalidState)
        );
    }

    #[test]
    fn neighbors_are_clipped_to_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.neighbors(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4);
    }

    #[test]
    fn walls_are_not_passable() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_cell(Cell::new(0, 1), CellState::Wall).unwrap();
        grid.set_cell(Cell::new(0, 0), CellState::Start).unwrap();
        assert!(!grid.is_passable(Cell::new(0, 1)));
        assert!(grid.is_passable(Cell::new(0, 0)));
        assert!(!grid.is_passable(Cell::new(5, 5)));
        assert_eq!(
            grid.passable_neighbors(Cell::new(0, 0)).collect::<Vec<_>>(),
            vec![Cell::new(1, 0)]
        );
        assert_eq!(grid.walls().collect::<Vec<_>>(), vec![Cell::new(0, 1)]);
    }

    #[test]
    fn clear_restores_a_fresh_grid() {
        let mut grid = Grid::new(4, 5).unwrap();
        grid.set_cell(Cell::new(0, 0), CellState::Start).unwrap();
        grid.set_cell(Cell::new(3, 4), CellState::End).unwrap();
        grid.set_cell(Cell::new(2, 2), CellState::Wall).unwrap();
        grid.clear();
        assert_eq!(grid, Grid::new(4, 5).unwrap());
        assert!(grid.start().is_none());
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn cells_are_stored_at_their_point() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // |.#.|
        // |..S|
        //  ___
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell(Cell::new(0, 1), CellState::Wall).unwrap();
        grid.set_cell(Cell::new(1, 2), CellState::Start).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cells.get_point(Point::new(1, 0)), CellState::Wall);
        assert_eq!(grid.cells.get_ix_point(&Point::new(2, 1)), 5);
        assert_eq!(grid.cells.values[5], CellState::Start);
        assert_eq!(grid.get_cell(Cell::new(0, 1)), Ok(CellState::Wall));
        assert_eq!(grid.get_cell(Cell::new(1, 2)), Ok(CellState::Start));
        assert!(!grid.in_bounds(Cell::new(2, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 3)));
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(matches!(
            grid.get_cell(Cell::new(-1, 0)),
            Err(GridError::InvalidCell { .. })
        ));
    }

    #[test]
    fn display_marks_each_state() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell(Cell::new(0, 0), CellState::Start).unwrap();
        grid.set_cell(Cell::new(1, 2), CellState::End).unwrap();
        grid.set_cell(Cell::new(0, 1), CellState::Wall).unwrap();
        assert_eq!(grid.to_string(), "S#.\n..E\n");
    }
}
