use thiserror::Error;

/// Rejection of a textual algorithm or heuristic selector.
///
/// Parsing is the only fallible boundary of the crate; grid and search
/// operations signal failure through their return values instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unknown algorithm `{0}` (expected astar, dijkstra, greedy or bfs)")]
    UnknownAlgorithm(String),
    #[error("unknown heuristic `{0}` (expected manhattan, euclidean or chebyshev)")]
    UnknownHeuristic(String),
}
