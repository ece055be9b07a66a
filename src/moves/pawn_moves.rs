use crate::game_state::chess_types::{Color, Square};

/// Row step of a pawn push: Light moves toward row 0, Dark toward row 7.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Row from which a double push is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Farthest row, where pawns promote.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Squares a pawn of `color` standing on `square` attacks.
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = pawn_forward(color);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| square.offset(d_file, forward))
}

/// Squares from which a pawn of `attacker` would attack `square`.
///
/// These sit diagonally behind `square` from the attacker's point of view.
pub fn pawn_attack_sources(attacker: Color, square: Square) -> impl Iterator<Item = Square> {
    let backward = -pawn_forward(attacker);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| square.offset(d_file, backward))
}
