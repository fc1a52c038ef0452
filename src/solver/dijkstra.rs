use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::search::best_first_search;
use crate::solver::{GridSolver, SearchOutcome};

/// Dijkstra: the A* harness with the heuristic forced to zero, ordering the
/// frontier by accumulated step cost alone. Always returns minimum-step
/// routes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn find_path(&self, grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome {
        best_first_search(grid, start, goal, |g, _| g as f64, |_, _| 0.0, true)
    }
}
