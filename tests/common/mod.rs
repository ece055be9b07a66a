#![allow(dead_code)]

use plum_chess_rules::{CastlingRights, Color, GameState, Piece, PieceKind, Square};

pub fn sq(label: &str) -> Square {
    label.parse().expect("test square should parse")
}

fn piece_from_letter(letter: char) -> Piece {
    let color = if letter.is_ascii_uppercase() { Color::Light } else { Color::Dark };
    let kind = match letter.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        other => panic!("unknown piece letter {other:?}"),
    };
    Piece::new(kind, color)
}

/// Builds a position from a slash-separated layout, rank 8 first, digits for
/// runs of empty squares. Castling rights start empty.
pub fn position(layout: &str, side_to_move: Color) -> GameState {
    let mut state = GameState::new_empty();
    let rows: Vec<&str> = layout.split('/').collect();
    assert_eq!(rows.len(), 8, "layout needs eight rows");

    for (row, text) in rows.iter().enumerate() {
        let mut file = 0i8;
        for ch in text.chars() {
            if let Some(run) = ch.to_digit(10) {
                file += run as i8;
                continue;
            }
            let square = Square::new(file, row as i8).expect("layout square should be on board");
            state.set_piece(square, Some(piece_from_letter(ch)));
            file += 1;
        }
        assert_eq!(file, 8, "row {row} of layout is not eight files wide");
    }

    state.side_to_move = side_to_move;
    state
}

pub fn with_full_castling(mut state: GameState) -> GameState {
    state.castling_rights = [CastlingRights::ALL; 2];
    state
}
