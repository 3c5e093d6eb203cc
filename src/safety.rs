// Immediate move legality
//
// A move is safe when the cell it lands on is on the board and not part of any
// body. Every segment counts as it was reported, tails included: nothing is
// assumed to vacate before the move resolves.

use crate::board::{Bounds, OccupiedCells};
use crate::types::{Coord, Direction};

/// True if a snake could occupy `coord` this turn.
/// Takes the snapshot's `Bounds` value, the same check `Snapshot::is_within_bounds`
/// answers, so the area walk can run without a snapshot.
pub fn is_open_cell(coord: &Coord, bounds: &Bounds, occupied: &OccupiedCells) -> bool {
    bounds.contains(coord) && !occupied.contains(coord)
}

/// Per-direction safety, indexed by `Direction::index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafetyFlags {
    flags: [bool; 4],
}

impl SafetyFlags {
    /// Checks all four moves away from `head`
    pub fn compute(head: &Coord, bounds: &Bounds, occupied: &OccupiedCells) -> Self {
        let mut flags = [false; 4];
        for dir in Direction::all().iter() {
            flags[dir.index()] = is_open_cell(&dir.apply(head), bounds, occupied);
        }
        SafetyFlags { flags }
    }

    pub fn is_safe(&self, dir: Direction) -> bool {
        self.flags[dir.index()]
    }

    /// Safe moves in `Direction::PRIORITY` order
    pub fn safe_directions(&self) -> Vec<Direction> {
        Direction::PRIORITY
            .iter()
            .copied()
            .filter(|dir| self.is_safe(*dir))
            .collect()
    }

    pub fn any_safe(&self) -> bool {
        self.flags.iter().any(|safe| *safe)
    }
}
