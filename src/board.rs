// Read-only view of a single turn's board
//
// A Snapshot borrows the request's board and our snake for the duration of one
// decision. Nothing here is cached between turns: the occupied-cell set is
// rebuilt from the bodies every time it is asked for.

use std::collections::HashSet;

use crate::types::{Battlesnake, Board, Coord};

/// Cells that no move may enter this turn
pub type OccupiedCells = HashSet<Coord>;

/// Playable area, `0..width` by `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Bounds {
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

/// One turn's board as seen by our snake
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    bounds: Bounds,
    you: &'a Battlesnake,
    snakes: &'a [Battlesnake],
    food: &'a [Coord],
}

impl<'a> Snapshot<'a> {
    pub fn new(board: &'a Board, you: &'a Battlesnake) -> Self {
        Snapshot {
            bounds: Bounds::new(board.width, board.height),
            you,
            snakes: &board.snakes,
            food: &board.food,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn head(&self) -> Coord {
        self.you.head
    }

    pub fn is_within_bounds(&self, coord: &Coord) -> bool {
        self.bounds.contains(coord)
    }

    /// Our body plus every body on the board, tails included.
    /// `board.snakes` normally contains us too; the overlap is harmless.
    pub fn all_occupied_cells(&self) -> OccupiedCells {
        self.you
            .body
            .iter()
            .chain(self.snakes.iter().flat_map(|snake| snake.body.iter()))
            .copied()
            .collect()
    }

    pub fn food_coordinates(&self) -> &'a [Coord] {
        self.food
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(id: &str, body: Vec<Coord>) -> Battlesnake {
        Battlesnake {
            id: id.to_string(),
            name: id.to_string(),
            health: 100,
            head: body[0],
            length: body.len() as i32,
            body,
            latency: "0".to_string(),
            shout: None,
        }
    }

    #[test]
    fn test_bounds_contains_edges_only_inside() {
        let bounds = Bounds::new(11, 11);
        assert!(bounds.contains(&Coord::new(0, 0)));
        assert!(bounds.contains(&Coord::new(10, 10)));
        assert!(!bounds.contains(&Coord::new(11, 5)));
        assert!(!bounds.contains(&Coord::new(5, -1)));
        assert_eq!(bounds.area(), 121);
    }

    #[test]
    fn test_bounds_follow_board_dimensions() {
        let bounds = Bounds::new(7, 19);
        assert!(bounds.contains(&Coord::new(6, 18)));
        assert!(!bounds.contains(&Coord::new(7, 0)));
        assert!(!bounds.contains(&Coord::new(0, 19)));
    }

    #[test]
    fn test_occupied_cells_cover_all_bodies() {
        let me = snake("me", vec![Coord::new(1, 1), Coord::new(1, 0)]);
        let them = snake("them", vec![Coord::new(5, 5), Coord::new(5, 6), Coord::new(5, 7)]);
        let board = Board {
            height: 11,
            width: 11,
            food: vec![Coord::new(3, 3)],
            snakes: vec![me.clone(), them],
            hazards: vec![],
        };

        let snapshot = Snapshot::new(&board, &me);
        let occupied = snapshot.all_occupied_cells();

        assert_eq!(occupied.len(), 5);
        assert!(occupied.contains(&Coord::new(1, 0)));
        assert!(occupied.contains(&Coord::new(5, 7)));
        assert_eq!(snapshot.head(), Coord::new(1, 1));
        assert!(snapshot.is_within_bounds(&Coord::new(10, 0)));
        assert!(!snapshot.is_within_bounds(&Coord::new(-1, 0)));
        assert_eq!(snapshot.food_coordinates(), &[Coord::new(3, 3)]);
    }
}
