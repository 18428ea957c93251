use maze_solver::{Algorithm, ClickEffect, DfsMode, Session, SessionConfig};

// Replays canvas clicks on the default 20x20 maze and compares the paths the two algorithms
// (and both depth-first modes) draw for the same walls.

const CLICKS: [(i32, i32); 14] = [
    (25, 35),
    (595, 605),
    (100, 20),
    (100, 50),
    (100, 80),
    (100, 110),
    (100, 140),
    (100, 170),
    (300, 605),
    (300, 575),
    (300, 545),
    (300, 515),
    (300, 485),
    (300, 455),
];

fn replay(config: SessionConfig) -> Session {
    let mut session = Session::new(config).unwrap();
    for (x, y) in CLICKS {
        if session.click_at(x, y).unwrap() == ClickEffect::Ignored {
            println!("Click at ({x}, {y}) ignored");
        }
    }
    session
}

fn main() {
    for (algorithm, dfs_mode) in [
        (Algorithm::UniformCost, DfsMode::LastPush),
        (Algorithm::DepthFirst, DfsMode::LastPush),
        (Algorithm::DepthFirst, DfsMode::FirstPush),
    ] {
        let mut session = replay(SessionConfig::default().with_dfs_mode(dfs_mode));
        let outcome = session.solve(algorithm).unwrap();
        println!("{algorithm} ({dfs_mode:?}):");
        print!("{}", session);
        if let Some(path) = outcome.path() {
            println!("{} steps\n", path.steps());
        }
    }
}
