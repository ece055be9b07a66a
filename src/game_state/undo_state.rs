use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Why a committed move ended the game in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMove,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "stalemate"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient"),
            DrawReason::FiftyMove => write!(f, "fifty-move"),
        }
    }
}

/// Single history entry for a committed move.
///
/// Owns a full copy of the position before the move, so undo is a wholesale
/// restore rather than an inverse delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub notation: String,
    pub captured_piece: Option<Piece>,

    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw: bool,
    pub draw_reason: Option<DrawReason>,

    pub previous_state: GameState,
    /// Full-move number in which this ply was played.
    pub fullmove_number: u16,
}

impl MoveRecord {
    #[inline]
    pub fn color(&self) -> Color {
        self.mv.color
    }

    /// True when this move ended the game.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.draw
    }
}

/// Ordered log of committed moves, oldest first. No redo stack.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }
}
