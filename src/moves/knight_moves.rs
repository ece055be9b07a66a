use crate::game_state::chess_types::Square;
use crate::moves::rays::{offset_targets, Direction};

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    offset_targets(square, &KNIGHT_OFFSETS)
}
