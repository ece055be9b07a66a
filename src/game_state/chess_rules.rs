//! Canonical chess-rule constants.
//!
//! This module stores the static rule literals the engine is configured by:
//! the starting layout, home rows, promotion choices and the fifty-move limit.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid row holding Light's back rank (the first rank).
pub const LIGHT_HOME_ROW: u8 = 7;
/// Grid row holding Dark's back rank (the eighth rank).
pub const DARK_HOME_ROW: u8 = 0;

/// File the king starts on.
pub const KING_HOME_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// Halfmove clock value at which the fifty-move rule draws the game.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Promotion pieces in generation order.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Promotion used when a `make_move` request omits the choice.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::Light => LIGHT_HOME_ROW,
        Color::Dark => DARK_HOME_ROW,
    }
}
