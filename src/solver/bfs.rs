use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::search::breadth_first_search;
use crate::solver::{GridSolver, SearchOutcome};

/// Breadth-first search: FIFO level-order expansion. With unit edge costs the
/// first route to reach the goal is minimal, so this matches Dijkstra and
/// admissible A* on length while tracking no numeric score at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn find_path(&self, grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome {
        breadth_first_search(grid, start, goal)
    }
}
