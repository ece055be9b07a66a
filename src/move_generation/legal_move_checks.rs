//! Attack detection.
//!
//! `is_square_attacked` never assumes a king stands on the probed square, so
//! the same routine answers both "is my king in check" and "may the king pass
//! through this square while castling".

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::is_diagonal;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rays::Ray;
use crate::moves::rook_moves::is_orthogonal;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .board
        .occupied()
        .find(|(_, piece)| piece.is(PieceKind::King, color))
        .map(|(square, _)| square)
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let board = &game_state.board;

    if pawn_attack_sources(attacker_color, square)
        .any(|from| board.get(from) == Some(Piece::new(PieceKind::Pawn, attacker_color)))
    {
        return true;
    }

    if knight_targets(square)
        .any(|from| board.get(from) == Some(Piece::new(PieceKind::Knight, attacker_color)))
    {
        return true;
    }

    for direction in QUEEN_DIRECTIONS {
        // The first occupied square on the ray decides; anything else blocks.
        let blocker = Ray::new(square, direction)
            .enumerate()
            .find_map(|(distance, sq)| board.get(sq).map(|piece| (distance + 1, piece)));

        let Some((distance, piece)) = blocker else {
            continue;
        };
        if piece.color != attacker_color {
            continue;
        }

        let attacks = match piece.kind {
            PieceKind::Queen => true,
            PieceKind::Bishop => is_diagonal(direction),
            PieceKind::Rook => is_orthogonal(direction),
            PieceKind::King => distance == 1,
            PieceKind::Pawn | PieceKind::Knight => false,
        };
        if attacks {
            return true;
        }
    }

    false
}
