use std::time::Duration;

use field_pathfinding::{Algorithm, FieldGrid, Heuristic, PathEngine, Position, TileState};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Batch experiment: sweep the obstacle density on a 16x16 grid and aggregate
// route length, nodes expanded and query time over repeated seeded runs.
// Realized fence counts sit below the nominal density because placements can
// collide and goal tiles are skipped.
fn main() {
    const COLUMNS: usize = 16;
    const ROWS: usize = 16;
    const RUNS: u64 = 10;
    let densities = [0.05, 0.10, 0.15, 0.20, 0.25, 0.30];

    println!(
        "{:>7} {:>8} {:>8} {:>9} {:>10} {:>9}",
        "density", "fences", "route", "visited", "time", "success"
    );
    for (index, density) in densities.into_iter().enumerate() {
        let mut fences = 0usize;
        let mut routes = 0usize;
        let mut visited = 0usize;
        let mut elapsed = Duration::ZERO;
        let mut successes = 0u64;

        for run in 0..RUNS {
            let mut grid = FieldGrid::new(COLUMNS, ROWS);
            let start = Position::new(0, 0);
            let goal = Position::new(ROWS as i32 - 1, COLUMNS as i32 - 1);
            grid.place_goal(goal.row, goal.col);
            let mut rng = StdRng::seed_from_u64(index as u64 * RUNS + run);
            grid.generate_random_obstacles(density, &mut rng);
            grid.set_tile(start.row, start.col, TileState::Open);

            let engine = PathEngine::new(&grid);
            let result = engine.find_path(start, goal, Algorithm::AStar, Heuristic::Manhattan);
            fences += grid.count_tiles(TileState::Fenced);
            visited += result.visited_nodes;
            elapsed += result.elapsed;
            if result.is_found() {
                routes += result.route_length();
                successes += 1;
            }
        }

        println!(
            "{:>7.2} {:>8.1} {:>8.1} {:>9.1} {:>10.2?} {:>6}/{}",
            density,
            fences as f64 / RUNS as f64,
            if successes > 0 {
                routes as f64 / successes as f64
            } else {
                0.0
            },
            visited as f64 / RUNS as f64,
            elapsed / RUNS as u32,
            successes,
            RUNS
        );
    }
}
