use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::moves::rays::{Direction, Ray};

/// Occupant of `square` if it belongs to the opponent of `color`.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, color: Color, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != color)
}

/// A leaper may land on an empty square or an enemy piece.
#[inline]
pub fn push_step_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    mover: Piece,
    out: &mut Vec<Move>,
) {
    match game_state.piece_at(to) {
        Some(target) if target.color == mover.color => {}
        target => out.push(Move::onto(from, to, mover.kind, mover.color, target)),
    }
}

/// Walk each direction until blocked; an enemy blocker is included as a capture.
pub fn push_sliding_moves(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for direction in directions {
        for to in Ray::new(from, *direction) {
            match game_state.piece_at(to) {
                None => out.push(Move::onto(from, to, mover.kind, mover.color, None)),
                Some(target) => {
                    if target.color != mover.color {
                        out.push(Move::onto(from, to, mover.kind, mover.color, Some(target)));
                    }
                    break;
                }
            }
        }
    }
}
