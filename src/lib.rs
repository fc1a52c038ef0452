//! # field_pathfinding
//!
//! Grid-based pathfinding for agents on tile fields. A [FieldGrid] holds
//! open, tilled (goal) and fenced (blocked) tiles; a [PathEngine] routes an
//! agent across it with a choice of four search strategies
//! ([A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), greedy
//! best-first and breadth-first search) and three distance heuristics
//! (Manhattan, Euclidean, Chebyshev). Movement is 4-directional with unit
//! step cost. Every query reports its route, nodes expanded and elapsed time,
//! and resolves ties through a fixed neighbor order plus FIFO frontier
//! tie-breaking, so results are fully deterministic for a given grid.
//!
//! ```
//! use field_pathfinding::{Algorithm, FieldGrid, Heuristic, PathEngine, Position, TileState};
//!
//! let mut grid = FieldGrid::new(5, 5);
//! grid.set_tile(2, 1, TileState::Fenced);
//! grid.place_goal(4, 4);
//! let engine = PathEngine::new(&grid);
//! let result = engine.find_path(
//!     Position::new(0, 0),
//!     Position::new(4, 4),
//!     Algorithm::AStar,
//!     Heuristic::Manhattan,
//! );
//! assert_eq!(result.route_length(), 8);
//! ```

mod search;

pub mod engine;
pub mod error;
pub mod field_grid;
pub mod position;
pub mod solver;

pub use engine::{NearestGoalResult, PathEngine, PathResult};
pub use error::SelectorError;
pub use field_grid::{FieldGrid, TileState};
pub use position::Position;
pub use solver::{
    Algorithm, AstarSolver, BfsSolver, DijkstraSolver, GreedySolver, GridSolver, Heuristic,
    SearchOutcome,
};
