use std::str::FromStr;

use core::fmt;

use crate::error::SelectorError;
use crate::field_grid::FieldGrid;
use crate::position::Position;

pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod greedy;
pub mod heuristic;

pub use astar::AstarSolver;
pub use bfs::BfsSolver;
pub use dijkstra::DijkstraSolver;
pub use greedy::GreedySolver;
pub use heuristic::Heuristic;

/// Raw result of one search: the route (start and goal inclusive) and the
/// number of nodes taken off the frontier. Wall-clock timing is layered on by
/// [PathEngine](crate::PathEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Position>>,
    pub expanded: usize,
}

/// A single-target search strategy over a [FieldGrid].
///
/// Implementations never mutate the grid and signal every failure mode
/// (out-of-bounds or fenced endpoints, exhausted frontier) as a [None] path.
pub trait GridSolver {
    fn find_path(&self, grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome;
}

/// Selects one of the four search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Greedy,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Greedy,
        Algorithm::Bfs,
    ];

    /// Whether the strategy guarantees minimum-step routes when paired with
    /// an admissible heuristic (or no heuristic at all).
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Greedy)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Greedy => "greedy",
            Algorithm::Bfs => "bfs",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Algorithm, SelectorError> {
        match s.to_ascii_lowercase().as_str() {
            "astar" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "greedy" => Ok(Algorithm::Greedy),
            "bfs" => Ok(Algorithm::Bfs),
            _ => Err(SelectorError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
