//! Rook move generation.
//!
//! Emits move descriptions for a rook on `from`, including captures of the
//! first enemy piece on each file or rank.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(game_state, from, mover, &ROOK_DIRECTIONS, out);
}
