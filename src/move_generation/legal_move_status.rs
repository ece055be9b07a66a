//! Post-commit classification of a position.
//!
//! Runs only on real commits, never inside legality simulation: check,
//! checkmate, stalemate, and the draw reason, checked in the order stalemate,
//! insufficient material, fifty-move rule. Draw reasons are reported even
//! alongside checkmate.

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::DrawReason};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionStatus {
    /// The side to move is in check.
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw_reason: Option<DrawReason>,
}

impl PositionStatus {
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.draw_reason.is_some()
    }
}

/// Classifies `game_state` from the point of view of its side to move.
pub fn classify_position<G: MoveGenerator + ?Sized>(generator: &G, game_state: &GameState) -> PositionStatus {
    let check = is_king_in_check(game_state, game_state.side_to_move);
    let no_moves = generator.generate_legal_moves(game_state).is_empty();

    let checkmate = no_moves && check;
    let stalemate = no_moves && !check;

    let draw_reason = if stalemate {
        Some(DrawReason::Stalemate)
    } else if is_insufficient_material(game_state) {
        Some(DrawReason::InsufficientMaterial)
    } else if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        Some(DrawReason::FiftyMove)
    } else {
        None
    };

    PositionStatus {
        check,
        checkmate,
        stalemate,
        draw_reason,
    }
}

/// Neither side can ever deliver mate with the material left.
///
/// True when no pawn, rook or queen remains and either there are no bishops
/// and at most one knight, or there are no knights and every bishop (either
/// color) stands on the same square shade.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut knights = 0usize;
    let mut bishop_shades = [false; 2];
    let mut bishops = 0usize;

    for (square, piece) in game_state.board.occupied() {
        match piece.kind {
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => knights += 1,
            PieceKind::Bishop => {
                bishops += 1;
                bishop_shades[square.shade() as usize] = true;
            }
            PieceKind::King => {}
        }
    }

    if bishops == 0 {
        return knights <= 1;
    }
    knights == 0 && !(bishop_shades[0] && bishop_shades[1])
}
