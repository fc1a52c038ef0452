use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::search::best_first_search;
use crate::solver::{GridSolver, Heuristic, SearchOutcome};

/// Greedy best-first: orders the frontier purely by the heuristic estimate to
/// the goal, ignoring accumulated cost. A position is considered at most once
/// however it was first reached, so routes can be longer than minimal but the
/// search still visits every reachable tile in the worst case.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver {
    pub heuristic: Heuristic,
}

impl GreedySolver {
    pub fn new(heuristic: Heuristic) -> GreedySolver {
        GreedySolver { heuristic }
    }
}

impl GridSolver for GreedySolver {
    fn find_path(&self, grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome {
        let heuristic = self.heuristic;
        best_first_search(
            grid,
            start,
            goal,
            |_, h| h,
            move |a, b| heuristic.estimate(a, b),
            false,
        )
    }
}
