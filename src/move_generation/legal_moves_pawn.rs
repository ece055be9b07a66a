use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_forward, pawn_start_row, promotion_row};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<Move>) {
    let side = mover.color;
    let forward = pawn_forward(side);

    if let Some(one_step) = from.offset(0, forward) {
        if game_state.board.is_empty(one_step) {
            push_pawn_move(out, Move::onto(from, one_step, PieceKind::Pawn, side, None));

            if from.row() == pawn_start_row(side) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if game_state.board.is_empty(two_step) {
                        out.push(Move::new(
                            from,
                            two_step,
                            PieceKind::Pawn,
                            side,
                            MoveFlags::double_push(),
                        ));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_attack_targets(side, from) {
        if let Some(target) = enemy_piece_on(game_state, side, to) {
            push_pawn_move(out, Move::onto(from, to, PieceKind::Pawn, side, Some(target)));
        } else if game_state.board.is_empty(to) && game_state.en_passant_square == Some(to) {
            // The passed pawn sits beside the mover, one row behind the target.
            let Some(capture_square) = to.offset(0, -forward) else {
                continue;
            };
            let mut mv = Move::new(from, to, PieceKind::Pawn, side, MoveFlags::QUIET)
                .capturing(Piece::new(PieceKind::Pawn, side.opposite()), capture_square);
            mv.flags.en_passant = true;
            out.push(mv);
        }
    }
}

/// Pushes `mv`, fanning it out into one move per promotion piece on the last row.
fn push_pawn_move(out: &mut Vec<Move>, mv: Move) {
    if mv.to.row() != promotion_row(mv.color) {
        out.push(mv);
        return;
    }
    for promo in PROMOTION_CHOICES {
        out.push(mv.promoting_to(promo));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        label.parse().expect("test square should parse")
    }

    fn generate(state: &GameState, from: &str) -> Vec<Move> {
        let from = sq(from);
        let mover = state.piece_at(from).expect("pawn should be on the from-square");
        let mut out = Vec::new();
        generate_pawn_moves(state, from, mover, &mut out);
        out
    }

    #[test]
    fn start_position_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let moves = generate(&game, "e2");
        assert_eq!(moves.len(), 2);
        let double = moves
            .iter()
            .find(|m| m.to == sq("e4"))
            .expect("double push should be generated");
        assert!(double.flags.double_push);
    }

    #[test]
    fn double_push_requires_both_squares_empty() {
        let mut game = GameState::new_game();
        game.set_piece(sq("e4"), Some(Piece::new(PieceKind::Knight, Color::Dark)));
        let moves = generate(&game, "e2");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e3"));

        game.set_piece(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::Dark)));
        assert!(generate(&game, "e2").is_empty());
    }

    #[test]
    fn promotion_generates_all_four_pieces() {
        let mut state = GameState::new_empty();
        state.set_piece(sq("b7"), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        state.set_piece(sq("a8"), Some(Piece::new(PieceKind::Rook, Color::Dark)));

        let moves = generate(&state, "b7");
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.flags.promotion));
        let captures = moves.iter().filter(|m| m.flags.capture).count();
        assert_eq!(captures, 4);
        for promo in PROMOTION_CHOICES {
            assert!(moves.iter().any(|m| m.to == sq("b8") && m.promotion == Some(promo)));
        }
    }

    #[test]
    fn en_passant_targets_pawn_beside_mover() {
        let mut state = GameState::new_empty();
        state.set_piece(sq("e5"), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        state.set_piece(sq("d5"), Some(Piece::new(PieceKind::Pawn, Color::Dark)));
        state.en_passant_square = Some(sq("d6"));

        let moves = generate(&state, "e5");
        let ep = moves
            .iter()
            .find(|m| m.flags.en_passant)
            .expect("en-passant capture should be generated");
        assert_eq!(ep.to, sq("d6"));
        assert_eq!(ep.capture_square, Some(sq("d5")));
        assert!(ep.flags.capture);
    }

    #[test]
    fn dark_pawn_moves_toward_first_rank() {
        let game = GameState::new_game();
        let moves = generate(&game, "d7");
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, ["d5", "d6"]);
    }
}
