use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::search::best_first_search;
use crate::solver::{GridSolver, Heuristic, SearchOutcome};

/// A*: orders the frontier by `f = g + h`, relaxing nodes whenever a strictly
/// cheaper route is found. Minimum-step routes are guaranteed as long as the
/// chosen heuristic never overestimates.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }
}

impl GridSolver for AstarSolver {
    fn find_path(&self, grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome {
        let heuristic = self.heuristic;
        best_first_search(
            grid,
            start,
            goal,
            |g, h| g as f64 + h,
            move |a, b| heuristic.estimate(a, b),
            true,
        )
    }
}
