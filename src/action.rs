//! First-class move type for tic-tac-toe.
//!
//! Moves are domain values, not side effects. They can be validated
//! independently of execution, serialized for replay, and logged.

use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: placing the current player's mark at a cell.
///
/// Coordinates are zero-based, row-major. Values outside 0-2 are
/// representable and rejected by [`crate::rules::apply_move`] with
/// [`crate::GameError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row coordinate (0-2).
    pub row: u8,
    /// Column coordinate (0-2).
    pub col: u8,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates are within the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row <= 2 && self.col <= 2
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
