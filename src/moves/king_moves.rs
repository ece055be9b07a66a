//! King step geometry.
//!
//! The eight adjacent offsets shared by king move generation and by the
//! distance-one king check in attack detection.

use crate::game_state::chess_types::Square;
use crate::moves::rays::{offset_targets, Direction};

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    offset_targets(square, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_targets_from_a1_has_three_targets() {
        let a1: Square = "a1".parse().expect("a1 should parse");
        assert_eq!(king_targets(a1).count(), 3);
    }

    #[test]
    fn king_targets_from_e4_has_eight_targets() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(king_targets(e4).count(), 8);
    }
}
