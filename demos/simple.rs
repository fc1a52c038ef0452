use field_pathfinding::{Algorithm, FieldGrid, Heuristic, PathEngine, Position, TileState};

// In this example a path is found on a 5x5 grid with shape
// S....
// .###.
// ...#.
// .#.#.
// ...G.
// S marks the start, G the goal and # fences.
fn main() {
    let mut grid = FieldGrid::new(5, 5);
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 1)] {
        grid.set_tile(row, col, TileState::Fenced);
    }
    grid.place_goal(4, 3);
    println!("{}", grid);

    let engine = PathEngine::new(&grid);
    let result = engine.find_path(
        Position::new(0, 0),
        Position::new(4, 3),
        Algorithm::AStar,
        Heuristic::Manhattan,
    );
    match &result.path {
        Some(path) => {
            println!(
                "A path of {} steps has been found ({} nodes expanded in {:?}):",
                result.route_length(),
                result.visited_nodes,
                result.elapsed
            );
            for p in path {
                println!("{}", p);
            }
        }
        None => println!("No path has been found"),
    }
}
