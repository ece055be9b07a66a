//! Core position snapshot.
//!
//! `GameState` is the complete, copyable unit the engine operates on: board,
//! side to move, castling rights, en-passant target and clocks. Simulation and
//! undo both work on whole clones of it, never on shared grid storage.

use crate::game_state::chess_rules::{home_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    /// Indexed by `Color::index()`.
    pub castling_rights: [CastlingRights; 2],
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            castling_rights: [CastlingRights::NONE; 2],
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, Light to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout with full castling rights for both sides.
    pub fn new_game() -> Self {
        let mut state = Self::default();
        for color in [Color::Light, Color::Dark] {
            let back = home_row(color) as i8;
            let pawns = match color {
                Color::Light => back - 1,
                Color::Dark => back + 1,
            };
            for (file, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let file = file as i8;
                if let Some(square) = Square::new(file, back) {
                    state.board.set(square, Some(Piece::new(*kind, color)));
                }
                if let Some(square) = Square::new(file, pawns) {
                    state.board.set(square, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        state.castling_rights = [CastlingRights::ALL; 2];
        state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// Places (or clears, with `None`) a piece. Used to build custom positions.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board.set(square, piece);
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    #[inline]
    pub fn castling_rights_mut(&mut self, color: Color) -> &mut CastlingRights {
        &mut self.castling_rights[color.index()]
    }

    /// Occupied squares, optionally restricted to one color.
    pub fn pieces(&self, color: Option<Color>) -> Vec<(Square, Piece)> {
        self.board
            .occupied()
            .filter(|(_, piece)| color.map_or(true, |c| piece.color == c))
            .collect()
    }
}
