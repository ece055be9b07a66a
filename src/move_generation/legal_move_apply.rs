//! Successor computation for a single move.
//!
//! `apply_move` is pure: it clones the incoming position, mutates the clone and
//! returns it. Legality filtering and real commits both go through here; only
//! commits go on to classify the result (see `legal_move_status`).

use crate::game_state::chess_rules::{home_row, KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{CastleSide, Move};

/// Result of applying one move to a cloned position.
#[derive(Debug, Clone)]
pub struct MoveApplication {
    pub game_after_move: GameState,
    /// What was actually removed from the board (for en passant, the passed pawn).
    pub captured_piece: Option<Piece>,
}

/// # Panics
///
/// Panics if `mv.from` is empty. Moves handed in here come from the generator,
/// so an empty origin is a programming defect rather than bad input.
pub fn apply_move(game_state: &GameState, mv: &Move) -> MoveApplication {
    let mut next = game_state.clone();
    let moving_color = mv.color;

    let Some(moving_piece) = next.board.take(mv.from) else {
        panic!("apply_move: no piece on from-square {}", mv.from);
    };

    // Handle captures.
    let (captured_piece, capture_square) = if mv.flags.en_passant {
        match mv.capture_square {
            Some(square) => (next.board.take(square), Some(square)),
            None => (None, None),
        }
    } else {
        (next.board.get(mv.to), Some(mv.to))
    };

    // Place moved/promoted piece on destination.
    let placed = match mv.promotion {
        Some(promo) => Piece::new(promo, moving_color),
        None => moving_piece,
    };
    next.board.set(mv.to, Some(placed));

    // Castling rook move.
    if let Some(side) = mv.flags.castle {
        let (rook_from_file, rook_to_delta) = match side {
            CastleSide::Kingside => (KINGSIDE_ROOK_FILE as i8, -1i8),
            CastleSide::Queenside => (QUEENSIDE_ROOK_FILE as i8, 1i8),
        };
        let rook_from = Square::new(rook_from_file, mv.from.row() as i8);
        let rook_to = mv.to.offset(rook_to_delta, 0);
        if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
            let rook = next.board.take(rook_from);
            next.board.set(rook_to, rook);
        }
    }

    // Update en-passant square.
    next.en_passant_square = if mv.flags.double_push {
        mv.from.offset(0, (mv.to.row() as i8 - mv.from.row() as i8) / 2)
    } else {
        None
    };

    update_castling_rights(&mut next, mv, moving_piece, captured_piece, capture_square);

    // Update clocks.
    if moving_piece.kind == PieceKind::Pawn || captured_piece.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();

    MoveApplication {
        game_after_move: next,
        captured_piece,
    }
}

fn update_castling_rights(
    game_state: &mut GameState,
    mv: &Move,
    moving_piece: Piece,
    captured_piece: Option<Piece>,
    capture_square: Option<Square>,
) {
    let moving_color = moving_piece.color;

    match moving_piece.kind {
        PieceKind::King => game_state.castling_rights_mut(moving_color).revoke_all(),
        PieceKind::Rook if mv.from.row() == home_row(moving_color) => {
            game_state
                .castling_rights_mut(moving_color)
                .revoke_for_rook_file(mv.from.file());
        }
        _ => {}
    }

    // Capturing a rook on its original corner also removes the owner's right.
    if let (Some(captured), Some(square)) = (captured_piece, capture_square) {
        if captured.kind == PieceKind::Rook && square.row() == home_row(captured.color) {
            game_state
                .castling_rights_mut(captured.color)
                .revoke_for_rook_file(square.file());
        }
    }
}
