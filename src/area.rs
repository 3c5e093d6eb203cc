// Room-left heuristics for a candidate move
//
// The default scorer is a greedy single-path walk: from the candidate cell it
// keeps stepping into the first open neighbor in `Direction::PRIORITY` order,
// never straight back onto the cell it came from, and counts the steps. It
// commits to one path and never backtracks, so it under-counts regions that
// branch. That is the behavior the snake has always played with; the
// exhaustive flood fill is available as a separate strategy rather than a
// silent replacement.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::board::{Bounds, OccupiedCells};
use crate::safety::is_open_cell;
use crate::types::{Coord, Direction};

/// How a candidate cell is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaStrategy {
    /// Single committed path, counting steps
    GreedyWalk,
    /// Size of the whole open region reachable from the cell
    FloodFill,
}

impl Default for AreaStrategy {
    fn default() -> Self {
        AreaStrategy::GreedyWalk
    }
}

impl AreaStrategy {
    /// Scores moving from `from` onto `start`
    pub fn score(&self, from: Coord, start: Coord, bounds: &Bounds, occupied: &OccupiedCells) -> usize {
        match self {
            AreaStrategy::GreedyWalk => greedy_walk(from, start, bounds, occupied),
            AreaStrategy::FloodFill => flood_fill(start, bounds, occupied),
        }
    }
}

/// Number of steps the greedy walk takes from `start`, having arrived from `from`.
///
/// Each visited cell is recorded before its neighbors are looked at. A step onto
/// a cell visited earlier in this walk still counts, but the walk stops there.
/// Returns 0 when `start` has no open neighbor other than `from`.
pub fn greedy_walk(from: Coord, start: Coord, bounds: &Bounds, occupied: &OccupiedCells) -> usize {
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut prev = from;
    let mut current = start;
    let mut steps = 0;

    while visited.insert(current) {
        let next = Direction::PRIORITY
            .iter()
            .map(|dir| dir.apply(&current))
            .find(|cell| *cell != prev && is_open_cell(cell, bounds, occupied));

        match next {
            Some(cell) => {
                steps += 1;
                prev = current;
                current = cell;
            }
            None => break,
        }
    }

    steps
}

/// Count of open cells connected to `start`, `start` included (BFS).
/// A blocked or off-board `start` scores 0.
pub fn flood_fill(start: Coord, bounds: &Bounds, occupied: &OccupiedCells) -> usize {
    if !is_open_cell(&start, bounds, occupied) {
        return 0;
    }

    let mut seen: HashSet<Coord> = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for dir in Direction::PRIORITY.iter() {
            let next = dir.apply(&cell);
            if is_open_cell(&next, bounds, occupied) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen.len()
}
