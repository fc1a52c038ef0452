//! Fuzzes the four strategies against each other on many random grids: BFS
//! serves as the reachability and length oracle, the optimal strategies must
//! match it exactly and the heuristic-driven ones may never beat it.

use field_pathfinding::{Algorithm, FieldGrid, Heuristic, PathEngine, Position, TileState};
use rand::prelude::*;

fn random_grid(side: usize, density: f64, rng: &mut StdRng) -> FieldGrid {
    let mut grid = FieldGrid::new(side, side);
    grid.generate_random_obstacles(density, rng);
    grid
}

fn visualize_grid(grid: &FieldGrid, start: Position, goal: Position) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.columns() as i32 {
            let p = Position::new(row, col);
            let glyph = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else {
                match grid.get_tile(row, col) {
                    Some(TileState::Fenced) => '#',
                    Some(TileState::Tilled) => 'T',
                    _ => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn assert_valid_path(grid: &FieldGrid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        let step = (pair[0].row - pair[1].row).abs() + (pair[0].col - pair[1].col).abs();
        assert_eq!(step, 1, "non-adjacent step {} -> {}", pair[0], pair[1]);
    }
    for p in path {
        assert!(grid.is_walkable(p.row, p.col), "path crosses fence at {}", p);
    }
}

#[test]
fn fuzz_strategy_agreement() {
    const N: usize = 12;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Position::new(0, 0);
    let goal = Position::new(N as i32 - 1, N as i32 - 1);

    let exact = [
        (Algorithm::AStar, Heuristic::Manhattan),
        (Algorithm::AStar, Heuristic::Euclidean),
        (Algorithm::Dijkstra, Heuristic::Manhattan),
    ];
    let inexact = [
        (Algorithm::Greedy, Heuristic::Manhattan),
        (Algorithm::Greedy, Heuristic::Euclidean),
        (Algorithm::Greedy, Heuristic::Chebyshev),
        (Algorithm::AStar, Heuristic::Chebyshev),
    ];
    // The split must match the guarantees the selectors advertise.
    for (algorithm, heuristic) in exact {
        assert!(algorithm.is_optimal() && heuristic.guarantees_optimality());
    }
    for (algorithm, heuristic) in inexact {
        assert!(!algorithm.is_optimal() || !heuristic.guarantees_optimality());
    }

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, 0.35, &mut rng);
        grid.set_tile(start.row, start.col, TileState::Open);
        grid.set_tile(goal.row, goal.col, TileState::Open);
        let engine = PathEngine::new(&grid);

        let oracle = engine.find_path(start, goal, Algorithm::Bfs, Heuristic::Manhattan);
        let reachable = oracle.is_found();
        let optimal = oracle.route_length();
        if let Some(path) = &oracle.path {
            assert_valid_path(&grid, path, start, goal);
        }

        for (algorithm, heuristic) in exact {
            let result = engine.find_path(start, goal, algorithm, heuristic);
            assert_eq!(
                result.is_found(),
                reachable,
                "{}/{} disagrees with bfs on reachability:\n{}",
                algorithm,
                heuristic,
                visualize_grid(&grid, start, goal)
            );
            if let Some(path) = &result.path {
                assert_eq!(
                    result.route_length(),
                    optimal,
                    "{}/{} is not minimal:\n{}",
                    algorithm,
                    heuristic,
                    visualize_grid(&grid, start, goal)
                );
                assert_valid_path(&grid, path, start, goal);
            }
        }

        for (algorithm, heuristic) in inexact {
            let result = engine.find_path(start, goal, algorithm, heuristic);
            assert_eq!(
                result.is_found(),
                reachable,
                "{}/{} disagrees with bfs on reachability:\n{}",
                algorithm,
                heuristic,
                visualize_grid(&grid, start, goal)
            );
            if let Some(path) = &result.path {
                assert!(
                    result.route_length() >= optimal,
                    "{}/{} beat the optimal route:\n{}",
                    algorithm,
                    heuristic,
                    visualize_grid(&grid, start, goal)
                );
                assert_valid_path(&grid, path, start, goal);
            }
        }
    }
}

#[test]
fn fuzz_nearest_goal_selection() {
    const N: usize = 10;
    const N_GRIDS: usize = 150;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Position::new(0, 0);

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, 0.3, &mut rng);
        grid.set_tile(start.row, start.col, TileState::Open);
        for _ in 0..3 {
            let row = rng.gen_range(0..N) as i32;
            let col = rng.gen_range(0..N) as i32;
            if grid.is_walkable(row, col) {
                grid.place_goal(row, col);
            }
        }
        let engine = PathEngine::new(&grid);

        let result = engine.find_nearest_goal(start, Algorithm::Bfs, Heuristic::Manhattan);
        let best = grid
            .find_goal_tiles()
            .into_iter()
            .filter_map(|goal| {
                engine
                    .find_path(start, goal, Algorithm::Bfs, Heuristic::Manhattan)
                    .path
                    .map(|path| path.len() - 1)
            })
            .min();

        match best {
            Some(expected) => {
                let (goal, path) = result.nearest.expect("a goal is reachable");
                assert_eq!(path.len() - 1, expected);
                assert_valid_path(&grid, &path, start, goal);
                assert_eq!(grid.get_tile(goal.row, goal.col), Some(TileState::Tilled));
            }
            None => assert!(result.nearest.is_none()),
        }
    }
}
