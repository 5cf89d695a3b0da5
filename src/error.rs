//! Validation errors for the rules engine.

use crate::action::Move;

/// Error that can occur when validating a move or querying an outcome.
///
/// All variants are local validation failures on malformed input; none
/// are retried. The search engine never triggers them because it only
/// applies moves drawn from `legal_moves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate of the move is outside the 3x3 grid.
    #[display("Move {} is out of bounds", _0)]
    OutOfBounds(Move),

    /// The square at the move's position is already occupied.
    #[display("Square at {} is already occupied", _0)]
    OccupiedCell(Move),

    /// Outcome was queried on a board where the game is still in progress.
    #[display("Outcome queried on a non-terminal board")]
    InvalidState,
}

impl std::error::Error for GameError {}
