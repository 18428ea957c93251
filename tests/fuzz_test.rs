/// Fuzzes the solvers by checking for many random grids that a path is found exactly when the
/// end is reachable according to a breadth-first flood, that uniform-cost paths are
/// as short as a breadth-first flood says they can be, and that every returned path is valid.
use std::collections::VecDeque;

use maze_solver::{
    Algorithm, Cell, CellState, DepthFirstSolver, DfsMode, DijkstraSolver, Grid, GridSolver,
    Outcome, Path, Session, SessionConfig,
};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Cell, end: Cell) -> Grid {
    let mut grid = Grid::new(n, n).unwrap();
    grid.set_cell(start, CellState::Start).unwrap();
    grid.set_cell(end, CellState::End).unwrap();
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            let cell = Cell::new(row, col);
            if grid.get_cell(cell).unwrap().is_empty() && rng.gen_bool(0.4) {
                grid.set_cell(cell, CellState::Wall).unwrap();
            }
        }
    }
    grid
}

fn visualize_grid(grid: &Grid) {
    print!("{}", grid);
}

/// Step count of a shortest path found by flooding the grid.
fn flood_distance(grid: &Grid, start: Cell, end: Cell) -> Option<usize> {
    let mut distances = vec![vec![None; grid.cols()]; grid.rows()];
    distances[start.row as usize][start.col as usize] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let d = distances[cell.row as usize][cell.col as usize].unwrap();
        if cell == end {
            return Some(d);
        }
        for n in grid.passable_neighbors(cell) {
            let slot = &mut distances[n.row as usize][n.col as usize];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_valid(grid: &Grid, path: &Path, start: Cell, end: Cell) {
    if !path.is_contiguous() {
        visualize_grid(grid);
        println!("{}", path);
    }
    assert!(path.is_contiguous());
    assert_eq!(path.start(), Some(start));
    assert_eq!(path.end(), Some(end));
    assert!(path.cells().iter().all(|c| grid.is_passable(*c)));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    let solvers: [(&str, Box<dyn GridSolver>); 3] = [
        ("dijkstra", Box::new(DijkstraSolver)),
        ("dfs last push", Box::new(DepthFirstSolver::new(DfsMode::LastPush))),
        ("dfs first push", Box::new(DepthFirstSolver::new(DfsMode::FirstPush))),
    ];
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, start, end);
        let reachable = flood_distance(&grid, start, end).is_some();
        for (name, solver) in &solvers {
            let path = solver.get_path_single_goal(&grid, start, end);
            // Show the grid if a path is not found
            if path.is_some() != reachable {
                println!("{name} disagrees with the flood");
                visualize_grid(&grid);
            }
            assert_eq!(path.is_some(), reachable);
            if let Some(path) = path {
                assert_valid(&grid, &path, start, end);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let start = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let mut end = start;
        while end == start {
            end = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        }
        let grid = random_grid(N, &mut rng, start, end);
        let expected = flood_distance(&grid, start, end);
        let path = DijkstraSolver.get_path_single_goal(&grid, start, end);
        if path.as_ref().map(|p| p.steps()) != expected {
            visualize_grid(&grid);
        }
        assert_eq!(path.map(|p| p.steps()), expected);
    }
}

#[test]
fn open_grid_paths_follow_manhattan_distance() {
    const N: i32 = 6;
    let cells: Vec<Cell> = (0..N)
        .flat_map(|row| (0..N).map(move |col| Cell::new(row, col)))
        .collect();
    for &start in &cells {
        for &end in &cells {
            if start == end {
                continue;
            }
            let mut grid = Grid::new(N as usize, N as usize).unwrap();
            grid.set_cell(start, CellState::Start).unwrap();
            grid.set_cell(end, CellState::End).unwrap();
            let path = DijkstraSolver
                .get_path_single_goal(&grid, start, end)
                .unwrap();
            assert_eq!(path.steps() as i32, start.manhattan_distance(&end));
            let dfs_path = DepthFirstSolver::default()
                .get_path_single_goal(&grid, start, end)
                .unwrap();
            assert_valid(&grid, &dfs_path, start, end);
        }
    }
}

/// Replaying the same clicks must give the same path.
#[test]
fn sessions_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = SessionConfig::default();
    for _ in 0..200 {
        let clicks: Vec<Cell> = (0..120)
            .map(|_| Cell::new(rng.gen_range(0..20), rng.gen_range(0..20)))
            .collect();
        for algorithm in Algorithm::ALL {
            let outcomes: Vec<Outcome> = (0..2)
                .map(|_| {
                    let mut session = Session::new(config).unwrap();
                    for cell in &clicks {
                        session.click(*cell).unwrap();
                    }
                    session.solve(algorithm).unwrap()
                })
                .collect();
            assert_eq!(outcomes[0], outcomes[1]);
            if let Outcome::Solved(path) = &outcomes[0] {
                let mut session = Session::new(config).unwrap();
                for cell in &clicks {
                    session.click(*cell).unwrap();
                }
                let grid = session.grid();
                assert!(grid.walls().all(|wall| !path.contains(&wall)));
                assert!(path.is_contiguous());
            }
        }
    }
}
