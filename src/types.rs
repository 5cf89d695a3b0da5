//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are value types: every transformation in [`crate::rules`]
/// returns a new, independent board and never mutates its input. The
/// recursive search relies on this to stay free of aliasing bugs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board - the canonical starting state.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from an explicit square array (row-major).
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given coordinates.
    ///
    /// Returns `None` if either coordinate is outside 0-2.
    pub fn get(&self, row: u8, col: u8) -> Option<Square> {
        if row > 2 || col > 2 {
            return None;
        }
        Some(self.squares[usize::from(row) * 3 + usize::from(col)])
    }

    /// Sets the square at the given coordinates.
    ///
    /// Callers must have validated the coordinates; the rules module
    /// only calls this through `apply_move`/`apply_unchecked`.
    pub(crate) fn set(&mut self, row: u8, col: u8, square: Square) {
        self.squares[usize::from(row) * 3 + usize::from(col)] = square;
    }

    /// Checks if the square at the given coordinates is empty.
    pub fn is_empty(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all squares as a slice (row-major).
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3u8 {
            for col in 0..3u8 {
                let symbol = match self.squares[usize::from(row) * 3 + usize::from(col)] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                f.write_str(if col > 0 { "|" } else { "" })?;
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
