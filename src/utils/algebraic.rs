//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable labels (e.g., `e4`) and the internal
//! `(file, row)` grid coordinates, where row 0 holds the eighth rank.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert an algebraic label (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file_index = (file - b'a') as i8;
    let row_index = (b'8' - rank) as i8;
    Square::new(file_index, row_index).ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))
}

/// Convert a square to its algebraic label (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
