use crate::game_state::chess_rules::{
    home_row, KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{CastleSide, Move, MoveFlags};

pub fn generate_king_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        push_step_move(game_state, from, to, mover, out);
    }

    generate_castling_moves(game_state, from, mover.color, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, side: Color, out: &mut Vec<Move>) {
    let rights = game_state.castling_rights(side);
    if !rights.kingside && !rights.queenside {
        return;
    }
    if king_from.row() != home_row(side) || king_from.file() != KING_HOME_FILE {
        return;
    }

    let enemy = side.opposite();

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    if rights.kingside {
        push_castle_if_clear(game_state, king_from, side, CastleSide::Kingside, out);
    }
    if rights.queenside {
        push_castle_if_clear(game_state, king_from, side, CastleSide::Queenside, out);
    }
}

fn push_castle_if_clear(
    game_state: &GameState,
    king_from: Square,
    side: Color,
    castle_side: CastleSide,
    out: &mut Vec<Move>,
) {
    let (step, rook_file) = match castle_side {
        CastleSide::Kingside => (1i8, KINGSIDE_ROOK_FILE),
        CastleSide::Queenside => (-1i8, QUEENSIDE_ROOK_FILE),
    };

    let Some(rook_square) = Square::new(rook_file as i8, king_from.row() as i8) else {
        return;
    };
    if game_state.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, side)) {
        return;
    }

    // Every square strictly between king and rook must be empty.
    let between = (rook_file as i8 - king_from.file() as i8).abs() - 1;
    let path_clear = (1..=between)
        .filter_map(|distance| king_from.offset(step * distance, 0))
        .all(|square| game_state.board.is_empty(square));
    if !path_clear {
        return;
    }

    // Only the squares the king crosses or lands on must be safe.
    let (Some(crossed), Some(landing)) = (king_from.offset(step, 0), king_from.offset(2 * step, 0))
    else {
        return;
    };
    let enemy = side.opposite();
    if is_square_attacked(game_state, crossed, enemy) || is_square_attacked(game_state, landing, enemy) {
        return;
    }

    out.push(Move::new(
        king_from,
        landing,
        PieceKind::King,
        side,
        MoveFlags::castle(castle_side),
    ));
}
