//! Crate root module declarations for the Plum Chess rules engine.
//!
//! This file exposes the rules subsystems (position model, piece geometry,
//! move generation and legality filtering, notation helpers) together with the
//! `ChessGame` façade that hosts drive through square-pair move requests.

pub mod errors;
pub mod chess_game;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_status;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}

pub use chess_game::ChessGame;
pub use errors::ChessError;
pub use game_state::chess_types::{Board, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use game_state::undo_state::{DrawReason, MoveRecord};
pub use moves::move_descriptions::{CastleSide, Move, MoveFlags};
