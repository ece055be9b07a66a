use thiserror::Error;

/// Represents the parse failures that can occur at the engine's text boundary.
///
/// Gameplay outcomes (illegal moves, empty history) are not errors; the
/// `ChessGame` façade reports those as `None` or empty collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The square label is not a file letter `a..=h` followed by a rank digit `1..=8`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),
    /// The promotion character is not one of `q`, `r`, `b`, `n` (any case).
    #[error("invalid promotion piece character: {0:?}")]
    InvalidPromotion(char),
    /// The coordinate move is not of the form `e2e4` or `e7e8q`.
    #[error("invalid coordinate move: {0:?}")]
    InvalidCoordinateMove(String),
}
