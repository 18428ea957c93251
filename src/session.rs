use core::fmt;

use log::{debug, info, warn};

use crate::cell::{Cell, CellState};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::grid::Grid;
use crate::path::{reconstruct, Path};
use crate::solver::{Algorithm, GridSolver};

/// Where a [Session] is in its configure-then-solve lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing placed yet.
    #[default]
    Unconfigured,
    /// The start is placed, the end is not.
    HasStart,
    /// Both endpoints placed, no walls.
    HasStartEnd,
    /// Both endpoints and at least one wall placed.
    Ready,
    /// Terminal: a path was found.
    Solved,
    /// Terminal: the end can not be reached.
    NoPathFound,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Solved | SessionState::NoPathFound)
    }

    pub fn can_solve(self) -> bool {
        matches!(self, SessionState::HasStartEnd | SessionState::Ready)
    }

    /// Derives the non-terminal state from what has been placed on `grid`.
    fn configured(grid: &Grid) -> SessionState {
        match (grid.start(), grid.end()) {
            (None, _) => SessionState::Unconfigured,
            (Some(_), None) => SessionState::HasStart,
            (Some(_), Some(_)) if grid.wall_count() > 0 => SessionState::Ready,
            (Some(_), Some(_)) => SessionState::HasStartEnd,
        }
    }
}

/// Result of a completed solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Path),
    NoPath,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Solved(path) => Some(path),
            Outcome::NoPath => None,
        }
    }
}

/// What a click did to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickEffect {
    PlacedStart(Cell),
    PlacedEnd(Cell),
    PlacedWall(Cell),
    /// The click landed outside the grid, on an occupied cell, or after the maze was solved.
    Ignored,
}

/// One configure-then-solve lifecycle over a single [Grid]. A session may be solved once;
/// [reset](Session::reset) returns it to a fresh state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    state: SessionState,
    path: Option<Path>,
    solved_with: Option<Algorithm>,
}

impl Default for Session {
    fn default() -> Session {
        Session {
            config: SessionConfig::default(),
            grid: Grid::default(),
            state: SessionState::Unconfigured,
            path: None,
            solved_with: None,
        }
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Session, SessionError> {
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Session {
            config,
            grid,
            state: SessionState::Unconfigured,
            path: None,
            solved_with: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The path of the last successful solve.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn solved_with(&self) -> Option<Algorithm> {
        self.solved_with
    }

    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    /// The kind of cell the next placement is expected to be.
    fn next_placement(&self) -> CellState {
        match (self.grid.start(), self.grid.end()) {
            (None, _) => CellState::Start,
            (Some(_), None) => CellState::End,
            (Some(_), Some(_)) => CellState::Wall,
        }
    }

    /// Places `state` on `cell`. The end can only follow the start and walls only follow both
    /// endpoints. Rejected once the session reached a terminal state.
    pub fn set_cell(&mut self, cell: Cell, state: CellState) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::AlreadySolved);
        }
        let expected = self.next_placement();
        let too_early = match state {
            CellState::End => expected == CellState::Start,
            CellState::Wall => expected != CellState::Wall,
            CellState::Empty | CellState::Start => false,
        };
        if too_early {
            return Err(SessionError::OutOfOrder { state, expected });
        }
        self.grid.set_cell(cell, state)?;
        self.state = SessionState::configured(&self.grid);
        Ok(())
    }

    /// Applies a click on `cell`: the first empty cell clicked becomes the start, the second
    /// the end and every further empty cell a wall. Clicks on occupied cells or on a solved
    /// maze do nothing.
    pub fn click(&mut self, cell: Cell) -> Result<ClickEffect, SessionError> {
        if self.state.is_terminal() {
            return Ok(ClickEffect::Ignored);
        }
        if !self.grid.get_cell(cell)?.is_empty() {
            return Ok(ClickEffect::Ignored);
        }
        let state = self.next_placement();
        let effect = match state {
            CellState::Start => ClickEffect::PlacedStart(cell),
            CellState::End => ClickEffect::PlacedEnd(cell),
            _ => ClickEffect::PlacedWall(cell),
        };
        self.set_cell(cell, state)?;
        debug!("Click on {}: {:?}", cell, effect);
        Ok(effect)
    }

    /// Applies a click at canvas pixel `(x, y)`. Pixels outside the grid are ignored.
    pub fn click_at(&mut self, x: i32, y: i32) -> Result<ClickEffect, SessionError> {
        match self.config.cell_at(x, y) {
            Some(cell) => self.click(cell),
            None => Ok(ClickEffect::Ignored),
        }
    }

    /// Searches for a path from the start to the end with `algorithm`. Succeeds at most once
    /// per session; both a found path and a proven absence of one end the session.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<Outcome, SessionError> {
        if self.state.is_terminal() {
            warn!("Solve with {} requested on a finished session", algorithm);
            return Err(SessionError::AlreadySolved);
        }
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            warn!("Solve with {} requested before both endpoints were set", algorithm);
            return Err(SessionError::MissingEndpoints);
        };
        let solver = algorithm.solver(self.config.dfs_mode);
        let predecessors = solver.search(&self.grid, start, end);
        self.solved_with = Some(algorithm);
        if !predecessors.contains(&end) {
            info!("{}: no path from {} to {}", algorithm, start, end);
            self.state = SessionState::NoPathFound;
            return Ok(Outcome::NoPath);
        }
        let path = match reconstruct(&predecessors, end) {
            Ok(path) => path,
            Err(err) => unreachable!("{} reported {} as reached: {}", algorithm, end, err),
        };
        info!(
            "{}: found a path of {} steps from {} to {}",
            algorithm,
            path.steps(),
            start,
            end
        );
        self.state = SessionState::Solved;
        self.path = Some(path.clone());
        Ok(Outcome::Solved(path))
    }

    /// Clears the grid and returns to [SessionState::Unconfigured]. Available in every state.
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.grid.clear();
        self.state = SessionState::Unconfigured;
        self.path = None;
        self.solved_with = None;
    }

    /// Prompt to show the user for the current state.
    pub fn status_message(&self) -> &'static str {
        match self.state {
            SessionState::Unconfigured => "Click to set the start point.",
            SessionState::HasStart => "Click to set the end point.",
            SessionState::HasStartEnd | SessionState::Ready => {
                "Click to draw walls. Then click 'Solve'."
            }
            SessionState::Solved => "Maze solved!",
            SessionState::NoPathFound => "No path found!",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() as i32 {
            let line: String = (0..self.grid.cols() as i32)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    let on_path = self.path.as_ref().is_some_and(|p| p.contains(&cell));
                    match self.grid.get_cell(cell) {
                        Ok(CellState::Empty) if on_path => '*',
                        Ok(state) => state.symbol(),
                        Err(_) => '?',
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", self.status_message())
    }
}
