// Move selection for a single turn
//
// safety filter -> area score per safe move -> best score wins, equal scores
// go to whichever cell is nearer food. With nothing safe the snake plays
// `Direction::FALLBACK` and hopes.

use log::{debug, warn};

use crate::area::AreaStrategy;
use crate::board::Snapshot;
use crate::safety::SafetyFlags;
use crate::types::{Coord, Direction};

/// Outcome of one decision plus what led to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDecision {
    pub direction: Direction,
    pub safety: SafetyFlags,
    /// Area score of every safe move, in evaluation order
    pub scores: Vec<(Direction, usize)>,
    /// No move was safe
    pub fallback: bool,
}

impl MoveDecision {
    /// Score of the chosen move, `None` on fallback
    pub fn chosen_score(&self) -> Option<usize> {
        self.scores
            .iter()
            .find(|(dir, _)| *dir == self.direction)
            .map(|(_, score)| *score)
    }
}

/// Picks this turn's move
pub fn select_move(snapshot: &Snapshot<'_>, strategy: AreaStrategy) -> MoveDecision {
    let head = snapshot.head();
    let bounds = snapshot.bounds();
    let occupied = snapshot.all_occupied_cells();

    let safety = SafetyFlags::compute(&head, &bounds, &occupied);

    if !safety.any_safe() {
        warn!("No safe moves from {}, falling back to {}", head, Direction::FALLBACK);
        return MoveDecision {
            direction: Direction::FALLBACK,
            safety,
            scores: Vec::new(),
            fallback: true,
        };
    }

    let candidates = safety.safe_directions();
    debug!("Safe moves from {}: {:?}", head, candidates);

    let food = snapshot.food_coordinates();
    let mut scores = Vec::with_capacity(candidates.len());
    let mut best: Option<(Direction, usize, Coord)> = None;

    for dir in candidates {
        let cell = dir.apply(&head);
        let score = strategy.score(head, cell, &bounds, &occupied);
        debug!("{} -> {} scores {}", dir, cell, score);
        scores.push((dir, score));

        best = match best {
            None => Some((dir, score, cell)),
            Some((_, best_score, _)) if score > best_score => Some((dir, score, cell)),
            Some((_, best_score, best_cell))
                if score == best_score && is_closer_to_food(&best_cell, &cell, food) =>
            {
                Some((dir, score, cell))
            }
            keep => keep,
        };
    }

    // candidates was non-empty, so best is always set here
    let direction = best.map(|(dir, _, _)| dir).unwrap_or(Direction::FALLBACK);

    MoveDecision {
        direction,
        safety,
        scores,
        fallback: false,
    }
}

/// Whether `new` beats `old` for nearness to food.
///
/// Walks the food in order keeping one running minimum across both cells: per
/// food item `old` is tried first, then `new`, each taking the lead only on a
/// strictly smaller squared distance. Exact ties therefore stay with `old`, and
/// with no food nothing is closer.
pub fn is_closer_to_food(old: &Coord, new: &Coord, food: &[Coord]) -> bool {
    let mut closest: Option<i32> = None;
    let mut closest_is_new = false;

    for item in food {
        let old_distance = old.squared_distance(item);
        let new_distance = new.squared_distance(item);

        if closest.map_or(true, |c| old_distance < c) {
            closest = Some(old_distance);
            closest_is_new = false;
        }
        if closest.map_or(true, |c| new_distance < c) {
            closest = Some(new_distance);
            closest_is_new = true;
        }
    }

    closest_is_new
}
