use field_pathfinding::{Algorithm, FieldGrid, Heuristic, PathEngine, Position, TileState};

// In this example the agent at S picks the closest of three goals
//  ___
// |S G|
// | # |
// |G G|
//  ___
// and walks to the top one, which is two steps away.
fn main() {
    let mut grid = FieldGrid::new(3, 3);
    grid.set_tile(1, 1, TileState::Fenced);
    grid.place_goal(0, 2);
    grid.place_goal(2, 0);
    grid.place_goal(2, 2);
    println!("{}", grid);

    let engine = PathEngine::new(&grid);
    let result = engine.find_nearest_goal(Position::new(0, 0), Algorithm::AStar, Heuristic::Manhattan);
    match &result.nearest {
        Some((goal, path)) => {
            println!("Selected goal: {}\n", goal);
            println!("Path:");
            for p in path {
                println!("{}", p);
            }
        }
        None => println!("No goal is reachable"),
    }
}
