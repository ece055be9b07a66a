use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_step_move(game_state, from, to, mover, out);
    }
}
