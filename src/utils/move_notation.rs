//! Simplified descriptive move notation and coordinate move strings.
//!
//! The descriptive form is `<glyph> <from> <–|×> <to>[ (= <glyph>)][ <marker>]`
//! with castling written `O-O` / `O-O-O`. There is no SAN disambiguation.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_status::PositionStatus;
use crate::moves::move_descriptions::{CastleSide, Move};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::piece_glyph;

pub fn describe_move(mv: &Move, status: &PositionStatus) -> String {
    match mv.flags.castle {
        Some(CastleSide::Kingside) => return "O-O".to_owned(),
        Some(CastleSide::Queenside) => return "O-O-O".to_owned(),
        None => {}
    }

    let capture_symbol = if mv.flags.capture { '×' } else { '–' };
    let mut out = format!(
        "{} {} {} {}",
        piece_glyph(mv.piece, mv.color),
        mv.from,
        capture_symbol,
        mv.to
    );

    if let Some(promo) = mv.promotion {
        out.push_str(&format!(" (= {})", piece_glyph(promo, mv.color)));
    }

    let marker = if status.checkmate {
        Some('#')
    } else if status.check {
        Some('+')
    } else if status.stalemate || status.is_draw() {
        Some('½')
    } else {
        None
    };
    if let Some(marker) = marker {
        out.push(' ');
        out.push(marker);
    }

    out
}

/// Split `e2e4` / `e7e8q` into from, to and optional promotion character.
///
/// The promotion character is returned unvalidated; matching it against the
/// legal promotions is `make_move`'s job.
pub fn parse_coordinate_move(text: &str) -> Result<(Square, Square, Option<char>), ChessError> {
    let text = text.trim();
    let invalid = || ChessError::InvalidCoordinateMove(text.to_owned());

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = text[4..].chars().next();

    Ok((from, to, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::undo_state::DrawReason;
    use crate::moves::move_descriptions::MoveFlags;

    fn sq(label: &str) -> Square {
        label.parse().expect("test square should parse")
    }

    #[test]
    fn quiet_and_capture_moves_use_distinct_symbols() {
        let quiet = Move::onto(sq("g1"), sq("f3"), PieceKind::Knight, Color::Light, None);
        assert_eq!(describe_move(&quiet, &PositionStatus::default()), "♘ g1 – f3");

        let capture = Move::onto(
            sq("d8"),
            sq("h4"),
            PieceKind::Queen,
            Color::Dark,
            Some(Piece::new(PieceKind::Pawn, Color::Light)),
        );
        let status = PositionStatus {
            check: true,
            ..PositionStatus::default()
        };
        assert_eq!(describe_move(&capture, &status), "♛ d8 × h4 +");
    }

    #[test]
    fn promotion_and_markers_are_appended() {
        let promo = Move::onto(sq("e7"), sq("e8"), PieceKind::Pawn, Color::Light, None)
            .promoting_to(PieceKind::Queen);
        let mate = PositionStatus {
            check: true,
            checkmate: true,
            ..PositionStatus::default()
        };
        assert_eq!(describe_move(&promo, &mate), "♙ e7 – e8 (= ♕) #");

        let drawn = PositionStatus {
            draw_reason: Some(DrawReason::InsufficientMaterial),
            ..PositionStatus::default()
        };
        assert_eq!(describe_move(&promo, &drawn), "♙ e7 – e8 (= ♕) ½");
    }

    #[test]
    fn castling_is_written_with_letter_o() {
        let short = Move::new(
            sq("e1"),
            sq("g1"),
            PieceKind::King,
            Color::Light,
            MoveFlags::castle(CastleSide::Kingside),
        );
        let long = Move::new(
            sq("e8"),
            sq("c8"),
            PieceKind::King,
            Color::Dark,
            MoveFlags::castle(CastleSide::Queenside),
        );
        assert_eq!(describe_move(&short, &PositionStatus::default()), "O-O");
        assert_eq!(describe_move(&long, &PositionStatus::default()), "O-O-O");
    }

    #[test]
    fn coordinate_moves_parse_with_optional_promotion() {
        assert_eq!(
            parse_coordinate_move("e2e4").expect("e2e4 should parse"),
            (sq("e2"), sq("e4"), None)
        );
        assert_eq!(
            parse_coordinate_move(" g7g8N ").expect("g7g8N should parse"),
            (sq("g7"), sq("g8"), Some('N'))
        );
        for bad in ["e2", "e2e9", "e2e4qq", "z1a1", "é2e4"] {
            assert!(parse_coordinate_move(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
