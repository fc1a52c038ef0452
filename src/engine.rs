use std::time::{Duration, Instant};

use log::debug;

use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::solver::{
    Algorithm, AstarSolver, BfsSolver, DijkstraSolver, GreedySolver, GridSolver, Heuristic,
    SearchOutcome,
};

/// Result of one single-target query: the route (start and goal inclusive),
/// the number of nodes expanded, and the wall-clock time the query took.
#[derive(Clone, Debug)]
pub struct PathResult {
    pub path: Option<Vec<Position>>,
    pub visited_nodes: usize,
    pub elapsed: Duration,
}

impl PathResult {
    /// Route length in steps: one less than the number of tiles, 0 while no
    /// path was found.
    pub fn route_length(&self) -> usize {
        match &self.path {
            Some(path) => path.len() - 1,
            None => 0,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Result of a nearest-goal query: the chosen goal with its route, plus
/// statistics aggregated over every per-goal sub-search.
#[derive(Clone, Debug)]
pub struct NearestGoalResult {
    pub nearest: Option<(Position, Vec<Position>)>,
    pub visited_nodes: usize,
    pub elapsed: Duration,
}

impl NearestGoalResult {
    pub fn route_length(&self) -> usize {
        match &self.nearest {
            Some((_, path)) => path.len() - 1,
            None => 0,
        }
    }
}

/// The query interface over one [FieldGrid].
///
/// The engine borrows the grid immutably for its whole lifetime and keeps no
/// per-call state; every query returns its statistics by value, so a single
/// engine can be shared freely between threads.
#[derive(Clone, Copy, Debug)]
pub struct PathEngine<'g> {
    grid: &'g FieldGrid,
}

impl<'g> PathEngine<'g> {
    pub fn new(grid: &'g FieldGrid) -> PathEngine<'g> {
        PathEngine { grid }
    }

    /// Searches a route from `start` to `goal` with the selected strategy.
    ///
    /// An out-of-bounds or fenced endpoint short-circuits to "no path" with
    /// zero nodes expanded. `heuristic` only influences [Algorithm::AStar]
    /// and [Algorithm::Greedy]; Dijkstra and BFS accept and ignore it.
    pub fn find_path(
        &self,
        start: Position,
        goal: Position,
        algorithm: Algorithm,
        heuristic: Heuristic,
    ) -> PathResult {
        let started = Instant::now();
        let outcome = self.run(start, goal, algorithm, heuristic);
        let elapsed = started.elapsed();
        debug!(
            "{}/{} {} -> {}: {} tiles, {} expanded in {:?}",
            algorithm,
            heuristic,
            start,
            goal,
            outcome.path.as_ref().map_or(0, Vec::len),
            outcome.expanded,
            elapsed
        );
        PathResult {
            path: outcome.path,
            visited_nodes: outcome.expanded,
            elapsed,
        }
    }

    /// Searches a route to the closest goal tile, trying every goal in
    /// row-major order and keeping the strictly shortest route found (the
    /// first goal wins ties). Unreachable goals are skipped; `nearest` is
    /// [None] only when no goal exists or none is reachable.
    pub fn find_nearest_goal(
        &self,
        start: Position,
        algorithm: Algorithm,
        heuristic: Heuristic,
    ) -> NearestGoalResult {
        let started = Instant::now();
        let mut visited_nodes = 0;
        let mut nearest: Option<(Position, Vec<Position>)> = None;
        for goal in self.grid.find_goal_tiles() {
            let outcome = self.run(start, goal, algorithm, heuristic);
            visited_nodes += outcome.expanded;
            if let Some(path) = outcome.path {
                let closer = nearest
                    .as_ref()
                    .map_or(true, |(_, best)| path.len() < best.len());
                if closer {
                    nearest = Some((goal, path));
                }
            }
        }
        let elapsed = started.elapsed();
        debug!(
            "nearest goal from {}: {:?}, {} expanded in {:?}",
            start,
            nearest.as_ref().map(|(goal, _)| *goal),
            visited_nodes,
            elapsed
        );
        NearestGoalResult {
            nearest,
            visited_nodes,
            elapsed,
        }
    }

    fn run(
        &self,
        start: Position,
        goal: Position,
        algorithm: Algorithm,
        heuristic: Heuristic,
    ) -> SearchOutcome {
        match algorithm {
            Algorithm::AStar => AstarSolver::new(heuristic).find_path(self.grid, start, goal),
            Algorithm::Dijkstra => DijkstraSolver.find_path(self.grid, start, goal),
            Algorithm::Greedy => GreedySolver::new(heuristic).find_path(self.grid, start, goal),
            Algorithm::Bfs => BfsSolver.find_path(self.grid, start, goal),
        }
    }
}
