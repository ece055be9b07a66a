mod common;

use common::position;
use plum_chess_rules::{ChessGame, Color, DrawReason, GameState};

fn game_at(layout: &str, halfmove_clock: u16) -> ChessGame {
    let mut state: GameState = position(layout, Color::Light);
    state.halfmove_clock = halfmove_clock;
    ChessGame::from_game_state(state)
}

#[test]
fn stalemating_move_is_a_draw() {
    let mut game = game_at("k7/8/8/8/8/8/1Q6/4K3", 0);
    let record = game.make_move("b2", "b6", None).expect("Qb6 should be legal");

    assert!(record.stalemate);
    assert!(!record.check);
    assert!(record.draw);
    assert_eq!(record.draw_reason, Some(DrawReason::Stalemate));
    assert_eq!(record.notation, "♕ b2 – b6 ½");
    assert!(game.is_game_over());
    assert!(game.legal_moves(None).is_empty());
}

#[test]
fn fifty_move_rule_triggers_at_one_hundred_halfmoves() {
    let mut game = game_at("4k3/8/8/8/8/8/8/R3K3", 99);
    let record = game.make_move("a1", "a2", None).expect("Ra2 should be legal");

    assert_eq!(game.game_state().halfmove_clock, 100);
    assert_eq!(record.draw_reason, Some(DrawReason::FiftyMove));
    assert_eq!(record.draw_reason.map(|r| r.to_string()), Some("fifty-move".to_owned()));
}

#[test]
fn pawn_move_resets_the_fifty_move_count() {
    let mut game = game_at("4k3/8/8/8/8/8/P7/R3K3", 99);
    let record = game.make_move("a2", "a3", None).expect("a3 should be legal");

    assert_eq!(game.game_state().halfmove_clock, 0);
    assert!(!record.draw);
    assert!(!game.is_game_over());
}

#[test]
fn capture_down_to_king_and_bishop_is_insufficient() {
    let mut game = game_at("4k3/8/8/8/8/8/3r4/2B1K3", 10);
    let record = game.make_move("c1", "d2", None).expect("Bxd2 should be legal");

    assert_eq!(game.game_state().halfmove_clock, 0);
    assert_eq!(record.draw_reason, Some(DrawReason::InsufficientMaterial));
    assert!(record.notation.ends_with(" ½"));
}

#[test]
fn bishops_on_one_shade_are_insufficient_even_on_opposite_sides() {
    // c1 and f8 are both dark squares.
    let mut game = game_at("4kb2/8/8/8/8/8/8/2B1K3", 0);
    let record = game.make_move("e1", "e2", None).expect("Ke2 should be legal");
    assert_eq!(record.draw_reason, Some(DrawReason::InsufficientMaterial));
}

#[test]
fn bishops_on_both_shades_play_on() {
    // c1 is dark, c8 is light.
    let mut game = game_at("2b1k3/8/8/8/8/8/8/2B1K3", 0);
    let record = game.make_move("e1", "e2", None).expect("Ke2 should be legal");
    assert_eq!(record.draw_reason, None);
    assert!(!game.is_game_over());
}

#[test]
fn mate_on_the_hundredth_halfmove_also_reports_the_draw() {
    let mut game = game_at("6k1/5ppp/8/8/8/8/8/R5K1", 99);
    let record = game.make_move("a1", "a8", None).expect("Ra8 should be legal");

    assert_eq!(game.game_state().halfmove_clock, 100);
    assert!(record.checkmate);
    assert!(record.draw);
    assert_eq!(record.draw_reason, Some(DrawReason::FiftyMove));
    assert_eq!(record.notation, "♖ a1 – a8 #");
    assert!(game.is_game_over());
}

#[test]
fn mate_on_a_fresh_clock_is_not_a_draw() {
    let mut game = game_at("6k1/5ppp/8/8/8/8/8/R5K1", 10);
    let record = game.make_move("a1", "a8", None).expect("Ra8 should be legal");

    assert!(record.checkmate);
    assert!(!record.draw);
    assert_eq!(record.draw_reason, None);
}
