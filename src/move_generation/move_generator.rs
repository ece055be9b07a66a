use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for a position.
///
/// Generation never mutates the position it is given; every simulation runs
/// on an owned clone.
pub trait MoveGenerator: Send + Sync {
    /// All legal moves for the side to move.
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;

    /// Legal moves of the piece on `from`. Empty when the square is empty or
    /// holds a piece of the side not to move.
    fn generate_legal_moves_from(&self, game_state: &GameState, from: Square) -> Vec<Move>;
}
