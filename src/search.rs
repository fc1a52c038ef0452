//! Shared search internals: the best-first harness used by A*, Dijkstra and
//! greedy best-first, and the level-order harness used by BFS. Algorithm
//! differences are confined to the priority and estimate closures plus the
//! relaxation flag, so expansion bookkeeping and tie-breaking behave
//! identically across solvers.

use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::field_grid::FieldGrid;
use crate::position::Position;
use crate::solver::SearchOutcome;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A frontier entry. `counter` is a monotonically increasing insertion stamp:
/// among equal priorities the earliest-inserted entry pops first, which makes
/// expansion order (and therefore returned paths) deterministic.
struct FrontierEntry {
    priority: f64,
    counter: u64,
    pos: Position,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
            && self.counter == other.counter
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the smallest priority pops
        // first, then the smallest insertion stamp (FIFO among ties).
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.counter.cmp(&self.counter),
            ord => ord,
        }
    }
}

fn reverse_path<V, F>(parents: &FxIndexMap<Position, V>, mut parent: F, goal: Position) -> Vec<Position>
where
    F: FnMut(&V) -> Option<Position>,
{
    let mut path: Vec<Position> = itertools::unfold(Some(goal), |current| {
        let pos = (*current)?;
        *current = parents.get(&pos).and_then(|value| parent(value));
        Some(pos)
    })
    .collect();
    path.reverse();
    path
}

/// Priority-queue search from `start` to `goal`.
///
/// `priority` maps a node's accumulated step cost `g` and heuristic estimate
/// `h` to its frontier ordering key; A* passes `g + h`, Dijkstra `g` and
/// greedy best-first `h`. With `relax` set, a strictly cheaper route to an
/// already-recorded node replaces its predecessor and re-enters the frontier;
/// without it a node is considered at most once, however it was first reached.
///
/// Stale heap entries are never removed in place. `open` mirrors the live
/// frontier membership, and a popped position absent from it is skipped.
pub(crate) fn best_first_search<FP, FH>(
    grid: &FieldGrid,
    start: Position,
    goal: Position,
    mut priority: FP,
    mut estimate: FH,
    relax: bool,
) -> SearchOutcome
where
    FP: FnMut(u32, f64) -> f64,
    FH: FnMut(Position, Position) -> f64,
{
    if !grid.is_walkable(start.row, start.col) || !grid.is_walkable(goal.row, goal.col) {
        return SearchOutcome::default();
    }

    let mut frontier = BinaryHeap::new();
    let mut open: FxHashSet<Position> = FxHashSet::default();
    // Predecessor and best known step cost per reached position, together so
    // a single lookup serves both relaxation and reconstruction.
    let mut parents: FxIndexMap<Position, (Option<Position>, u32)> = FxIndexMap::default();
    let mut counter: u64 = 0;
    let mut expanded: usize = 0;

    parents.insert(start, (None, 0));
    open.insert(start);
    frontier.push(FrontierEntry {
        priority: priority(0, estimate(start, goal)),
        counter,
        pos: start,
    });
    counter += 1;

    while let Some(FrontierEntry { pos: current, .. }) = frontier.pop() {
        if !open.remove(&current) {
            // Superseded by a cheaper reinsertion.
            continue;
        }
        expanded += 1;
        if current == goal {
            let path = reverse_path(&parents, |&(prev, _)| prev, goal);
            return SearchOutcome {
                path: Some(path),
                expanded,
            };
        }
        let (_, g) = parents[&current];
        for neighbor in grid.get_neighbors(current.row, current.col) {
            if !grid.is_walkable(neighbor.row, neighbor.col) {
                continue;
            }
            let tentative = g + 1;
            match parents.entry(neighbor) {
                Vacant(entry) => {
                    entry.insert((Some(current), tentative));
                }
                Occupied(mut entry) => {
                    if relax && entry.get().1 > tentative {
                        entry.insert((Some(current), tentative));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                priority: priority(tentative, estimate(neighbor, goal)),
                counter,
                pos: neighbor,
            });
            counter += 1;
            open.insert(neighbor);
        }
    }

    SearchOutcome {
        path: None,
        expanded,
    }
}

/// Level-order search from `start` to `goal`. The predecessor map doubles as
/// the visited set, so a position is enqueued at most once; with unit edge
/// costs the first route found is minimal.
pub(crate) fn breadth_first_search(grid: &FieldGrid, start: Position, goal: Position) -> SearchOutcome {
    if !grid.is_walkable(start.row, start.col) || !grid.is_walkable(goal.row, goal.col) {
        return SearchOutcome::default();
    }

    let mut queue: VecDeque<Position> = VecDeque::new();
    let mut parents: FxIndexMap<Position, Option<Position>> = FxIndexMap::default();
    let mut expanded: usize = 0;

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if current == goal {
            let path = reverse_path(&parents, |&prev| prev, goal);
            return SearchOutcome {
                path: Some(path),
                expanded,
            };
        }
        for neighbor in grid.get_neighbors(current.row, current.col) {
            if !grid.is_walkable(neighbor.row, neighbor.col) {
                continue;
            }
            if let Vacant(entry) = parents.entry(neighbor) {
                entry.insert(Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    SearchOutcome {
        path: None,
        expanded,
    }
}
