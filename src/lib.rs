//! # maze_solver
//!
//! The core of an interactive maze demonstrator. A user places a start, an end and walls on a
//! small grid and asks for a path using either
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), which finds a
//! shortest path, or [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! which finds some path. Movement is 4-directional with unit cost and neighbours are always
//! expanded in the order up, down, left, right, which makes both searches deterministic.
//!
//! Rendering is left to the caller: a [Session] accepts clicks and solve requests and hands
//! back a [Path] to draw.
//!
//! ```
//! use maze_solver::{Algorithm, Cell, Outcome, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_dimensions(3, 3)).unwrap();
//! session.click(Cell::new(0, 0)).unwrap(); // start
//! session.click(Cell::new(2, 2)).unwrap(); // end
//! session.click(Cell::new(1, 1)).unwrap(); // wall
//! match session.solve(Algorithm::UniformCost).unwrap() {
//!     Outcome::Solved(path) => assert_eq!(path.steps(), 4),
//!     Outcome::NoPath => unreachable!(),
//! }
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod session;
pub mod solver;

pub use cell::{Cell, CellState};
pub use config::SessionConfig;
pub use error::{GridError, PathError, SessionError};
pub use grid::Grid;
pub use path::{reconstruct, Path, PredecessorMap};
pub use session::{ClickEffect, Outcome, Session, SessionState};
pub use solver::dfs::{DepthFirstSolver, DfsMode};
pub use solver::dijkstra::DijkstraSolver;
pub use solver::{Algorithm, GridSolver};
