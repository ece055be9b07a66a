//! Full legal move generation pipeline.
//!
//! Dispatches per-piece pseudo-legal generation, simulates every candidate on a
//! cloned position and drops the ones that leave the mover's king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut pseudo = Vec::<Move>::with_capacity(64);
        for (from, piece) in game_state.board.occupied() {
            if piece.color == game_state.side_to_move {
                generate_piece_moves(game_state, from, piece, &mut pseudo);
            }
        }
        pseudo.retain(|mv| is_legal(game_state, mv));
        pseudo
    }

    fn generate_legal_moves_from(&self, game_state: &GameState, from: Square) -> Vec<Move> {
        let mut pseudo = Vec::<Move>::new();
        match game_state.piece_at(from) {
            Some(piece) if piece.color == game_state.side_to_move => {
                generate_piece_moves(game_state, from, piece, &mut pseudo);
            }
            _ => return pseudo,
        }
        pseudo.retain(|mv| is_legal(game_state, mv));
        pseudo
    }
}

/// Pseudo-legal moves of `piece` standing on `from`.
pub fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Illegal if the mover's own king is attacked after the move.
#[inline]
pub fn is_legal(game_state: &GameState, mv: &Move) -> bool {
    let next = apply_move(game_state, mv).game_after_move;
    !is_king_in_check(&next, mv.color)
}
