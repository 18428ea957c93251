use maze_solver::{Algorithm, Cell, Outcome, Session, SessionConfig};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood

fn main() {
    let mut session = Session::new(SessionConfig::default().with_dimensions(3, 3)).unwrap();
    session.click(Cell::new(0, 0)).unwrap();
    session.click(Cell::new(2, 2)).unwrap();
    session.click(Cell::new(1, 1)).unwrap();
    println!("{}", session.grid());
    if let Outcome::Solved(path) = session.solve(Algorithm::UniformCost).unwrap() {
        println!("Path:");
        for cell in &path {
            println!("{}", cell);
        }
    }
}
