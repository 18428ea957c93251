use thiserror::Error;

use crate::cell::{Cell, CellState};

/// Errors raised when mutating or querying a [Grid](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside `[0, rows) x [0, cols)`. Always a caller bug.
    #[error("cell {cell} lies outside the {rows}x{cols} grid")]
    InvalidCell { cell: Cell, rows: usize, cols: usize },

    /// The target cell already holds something; the click should be ignored.
    #[error("cell {cell} is already occupied by {state}")]
    AlreadyOccupied { cell: Cell, state: CellState },

    /// A second start or end was requested while one already exists.
    #[error("a {state} cell already exists at {existing}")]
    DuplicateEndpoint { state: CellState, existing: Cell },

    /// Cells only return to empty through a full clear.
    #[error("cells can not be set back to empty, clear the grid instead")]
    InvalidState,

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors raised by a [Session](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Solve requested before both start and end were placed.
    #[error("both a start and an end cell must be set before solving")]
    MissingEndpoints,

    /// The session reached a terminal state; it must be reset first.
    #[error("the maze has already been solved, reset to solve again")]
    AlreadySolved,

    /// Cells are placed start first, then end, then walls.
    #[error("can not place {state} yet, the {expected} cell comes first")]
    OutOfOrder {
        state: CellState,
        expected: CellState,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised while turning a predecessor map into a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The end cell was never reached by the search that produced the map.
    #[error("end cell {0} is not present in the predecessor map")]
    DisconnectedEnd(Cell),
}
