//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf statistics.
//! Used by the regression tests and the criterion benchmark.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, &mv, depth, 1, &mut total);
    }

    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let next = apply_move(game_state, mv).game_after_move;

    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.flags.capture {
            counts.captures += 1;
        }
        if mv.flags.en_passant {
            counts.en_passant += 1;
        }
        if mv.flags.castle.is_some() {
            counts.castles += 1;
        }
        if mv.flags.promotion {
            counts.promotions += 1;
        }
        if is_king_in_check(&next, next.side_to_move) {
            counts.checks += 1;
            if generator.generate_legal_moves(&next).is_empty() {
                counts.checkmates += 1;
            }
        }

        return;
    }

    for child in generator.generate_legal_moves(&next) {
        perft_recurse(generator, &next, &child, search_depth, current_depth + 1, counts);
    }
}
