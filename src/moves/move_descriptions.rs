//! Move description values.
//!
//! A `Move` is a pure description of a candidate ply; it never points into a
//! board. Castling is a single king move spanning two files; the rook hop is
//! applied when the move is committed.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub capture: bool,
    pub en_passant: bool,
    pub double_push: bool,
    pub promotion: bool,
    pub castle: Option<CastleSide>,
}

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags {
        capture: false,
        en_passant: false,
        double_push: false,
        promotion: false,
        castle: None,
    };

    #[inline]
    pub fn double_push() -> Self {
        Self {
            double_push: true,
            ..Self::QUIET
        }
    }

    #[inline]
    pub fn castle(side: CastleSide) -> Self {
        Self {
            castle: Some(side),
            ..Self::QUIET
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
    /// Square the captured piece stands on; differs from `to` only for en passant.
    pub capture_square: Option<Square>,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, piece: PieceKind, color: Color, flags: MoveFlags) -> Self {
        Self {
            from,
            to,
            piece,
            color,
            captured: None,
            promotion: None,
            flags,
            capture_square: None,
        }
    }

    /// Ordinary move onto `to`, capturing `target` if it holds a piece.
    #[inline]
    pub fn onto(
        from: Square,
        to: Square,
        piece: PieceKind,
        color: Color,
        target: Option<Piece>,
    ) -> Self {
        let mv = Self::new(from, to, piece, color, MoveFlags::QUIET);
        match target {
            Some(captured) => mv.capturing(captured, to),
            None => mv,
        }
    }

    #[inline]
    pub fn capturing(mut self, captured: Piece, square: Square) -> Self {
        self.captured = Some(captured);
        self.capture_square = Some(square);
        self.flags.capture = true;
        self
    }

    #[inline]
    pub fn promoting_to(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self.flags.promotion = true;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags.capture
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags.castle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        label.parse().expect("test square should parse")
    }

    #[test]
    fn onto_empty_square_is_quiet() {
        let mv = Move::onto(sq("g1"), sq("f3"), PieceKind::Knight, Color::Light, None);
        assert_eq!(mv.flags, MoveFlags::QUIET);
        assert_eq!(mv.capture_square, None);
    }

    #[test]
    fn capturing_promotion_keeps_both_flags() {
        let rook = Piece::new(PieceKind::Rook, Color::Dark);
        let mv = Move::onto(sq("b7"), sq("a8"), PieceKind::Pawn, Color::Light, Some(rook))
            .promoting_to(PieceKind::Knight);
        assert!(mv.flags.capture && mv.flags.promotion);
        assert_eq!(mv.captured, Some(rook));
        assert_eq!(mv.capture_square, Some(sq("a8")));
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }
}
