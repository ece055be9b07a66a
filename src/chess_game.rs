//! Public game façade.
//!
//! `ChessGame` owns one live position and its move history. Every mutation
//! replaces the live position with a freshly computed one, so each instance is
//! an independent game; wrap it in a single lock if a host shares it across
//! threads.

use tracing::{debug, trace};

use crate::game_state::chess_rules::DEFAULT_PROMOTION;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::{MoveHistory, MoveRecord};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_move_status::classify_position;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::utils::move_notation::{describe_move, parse_coordinate_move};
use crate::utils::render_game_state::piece_glyph;

#[derive(Debug, Clone)]
pub struct ChessGame {
    state: GameState,
    history: MoveHistory,
    generator: LegalMoveGenerator,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A game at the standard starting position.
    pub fn new() -> Self {
        Self::from_game_state(GameState::new_game())
    }

    /// A game starting from a caller-built position, with empty history.
    pub fn from_game_state(state: GameState) -> Self {
        Self {
            state,
            history: MoveHistory::new(),
            generator: LegalMoveGenerator,
        }
    }

    /// Restore the standard starting position and clear the history.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
        self.history.clear();
        debug!("game reset to starting position");
    }

    /// Occupant of a square label such as `"e4"`; `None` for empty or malformed labels.
    pub fn piece_at(&self, square: &str) -> Option<Piece> {
        let square = parse_square(square)?;
        self.state.piece_at(square)
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.side_to_move
    }

    /// Read-only view of the live position.
    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves of the piece on `from`, or of the whole side to move when `None`.
    ///
    /// A malformed label yields no moves.
    pub fn legal_moves(&self, from: Option<&str>) -> Vec<Move> {
        match from {
            None => self.generator.generate_legal_moves(&self.state),
            Some(label) => match parse_square(label) {
                Some(square) => self.generator.generate_legal_moves_from(&self.state, square),
                None => Vec::new(),
            },
        }
    }

    /// Commit the legal move from `from` to `to`.
    ///
    /// Promotions default to a queen when `promotion` is `None`. Returns `None`
    /// when no legal move matches the request (including a promotion character
    /// given for a non-promotion move).
    pub fn make_move(&mut self, from: &str, to: &str, promotion: Option<char>) -> Option<MoveRecord> {
        let (Some(from_sq), Some(to_sq)) = (parse_square(from), parse_square(to)) else {
            return None;
        };

        let selected = self
            .generator
            .generate_legal_moves_from(&self.state, from_sq)
            .into_iter()
            .find(|mv| mv.to == to_sq && promotion_matches(mv, promotion));

        let Some(mv) = selected else {
            trace!(from = %from_sq, to = %to_sq, ?promotion, "no legal move matches request");
            return None;
        };

        Some(self.commit(mv))
    }

    /// `make_move` driven by a coordinate string such as `"e2e4"` or `"e7e8n"`.
    pub fn make_coordinate_move(&mut self, text: &str) -> Option<MoveRecord> {
        let (from, to, promotion) = match parse_coordinate_move(text) {
            Ok(parts) => parts,
            Err(err) => {
                trace!(%err, "rejected coordinate move");
                return None;
            }
        };
        self.make_move(&from.to_string(), &to.to_string(), promotion)
    }

    fn commit(&mut self, mv: Move) -> MoveRecord {
        let applied = apply_move(&self.state, &mv);
        let status = classify_position(&self.generator, &applied.game_after_move);
        let notation = describe_move(&mv, &status);

        let previous_state = std::mem::replace(&mut self.state, applied.game_after_move);
        let fullmove_number = previous_state.fullmove_number;

        let record = MoveRecord {
            mv,
            notation,
            captured_piece: applied.captured_piece,
            check: status.check,
            checkmate: status.checkmate,
            stalemate: status.stalemate,
            draw: status.is_draw(),
            draw_reason: status.draw_reason,
            previous_state,
            fullmove_number,
        };

        debug!(
            notation = %record.notation,
            check = record.check,
            checkmate = record.checkmate,
            draw_reason = ?record.draw_reason,
            "committed move"
        );

        self.history.push(record.clone());
        record
    }

    /// Step back one ply. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.state = record.previous_state.clone();
        debug!(notation = %record.notation, "undid move");
        Some(record)
    }

    /// Committed moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        self.history.as_slice()
    }

    #[inline]
    pub fn last_record(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// True when the last committed move was checkmate or a draw.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.history.last().is_some_and(MoveRecord::is_game_over)
    }

    /// Deep copy of the grid; mutating it never touches the game.
    #[inline]
    pub fn export_board(&self) -> Board {
        self.state.board.clone()
    }

    #[inline]
    pub fn piece_glyph(kind: PieceKind, color: Color) -> char {
        piece_glyph(kind, color)
    }
}

fn parse_square(label: &str) -> Option<Square> {
    match label.parse::<Square>() {
        Ok(square) => Some(square),
        Err(err) => {
            trace!(%err, "ignoring malformed square label");
            None
        }
    }
}

fn promotion_matches(mv: &Move, requested: Option<char>) -> bool {
    match (mv.promotion, requested) {
        (Some(kind), None) => kind == DEFAULT_PROMOTION,
        (Some(kind), Some(ch)) => PieceKind::from_promotion_char(ch).is_ok_and(|wanted| wanted == kind),
        (None, None) => true,
        (None, Some(_)) => false,
    }
}
