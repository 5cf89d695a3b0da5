//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the 8 possible lines in a fixed order (rows, columns, main
/// diagonal, anti-diagonal) and returns `Some(player)` for the first
/// line whose three squares hold the same non-empty mark. In any state
/// reachable by alternating moves at most one player can have a line,
/// so the scan order carries no ambiguity.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    const LINES: [[(u8, u8); 3]; 8] = [
        // Rows
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        // Columns
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        // Diagonals
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a.0, a.1);
        if sq != Some(Square::Empty) && sq == board.get(b.0, b.1) && sq == board.get(c.0, c.1) {
            if let Some(Square::Occupied(player)) = sq {
                return Some(player);
            }
        }
    }

    None
}
