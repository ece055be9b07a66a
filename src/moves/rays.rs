//! Ray walking over the grid.
//!
//! A `Ray` yields the squares from a start square (exclusive) outward in one
//! direction until the board edge. Callers stop early at the first occupied
//! square; the ray itself knows nothing about occupancy.

use crate::game_state::chess_types::Square;

/// `(file_step, row_step)`.
pub type Direction = (i8, i8);

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    next: Option<Square>,
    direction: Direction,
}

impl Ray {
    #[inline]
    pub fn new(origin: Square, direction: Direction) -> Self {
        Self {
            next: origin.offset(direction.0, direction.1),
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.offset(self.direction.0, self.direction.1);
        Some(current)
    }
}

/// Squares reachable by a fixed set of single-step offsets (knight, king).
pub fn offset_targets(origin: Square, offsets: &[Direction]) -> impl Iterator<Item = Square> + '_ {
    offsets
        .iter()
        .filter_map(move |(d_file, d_row)| origin.offset(*d_file, *d_row))
}

#[cfg(test)]
mod tests {
    use super::Ray;
    use crate::game_state::chess_types::Square;

    #[test]
    fn ray_stops_at_board_edge() {
        let d4: Square = "d4".parse().expect("d4 should parse");
        let north: Vec<String> = Ray::new(d4, (0, -1)).map(|s| s.to_string()).collect();
        assert_eq!(north, ["d5", "d6", "d7", "d8"]);
        let h8: Square = "h8".parse().expect("h8 should parse");
        assert_eq!(Ray::new(h8, (1, -1)).count(), 0);
    }
}
