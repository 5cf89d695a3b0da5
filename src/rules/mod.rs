//! Pure rules engine: turn derivation, move generation and application,
//! terminal detection, and outcome scoring.
//!
//! Every function here is a pure function over [`Board`] values. Move
//! application returns a new board and never mutates its input, so the
//! recursive search can thread boards through without aliasing.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winner;

use crate::action::Move;
use crate::error::GameError;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Returns the player who has the next turn on the board.
///
/// Turn order is derived from mark counts rather than stored state:
/// X moves first, so X is to move whenever the counts are equal.
#[instrument(skip(board))]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns all legal moves on the board, in row-major order.
///
/// The order is deterministic; the search engine breaks ties in favor
/// of the first move enumerated here.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..3u8 {
        for col in 0..3u8 {
            if board.is_empty(row, col) {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// Applies a move, returning the resulting board.
///
/// The target square is set to the mark of [`current_player`]. The
/// input board is left untouched.
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if either coordinate is outside
/// 0-2, or [`GameError::OccupiedCell`] if the target square is not
/// empty.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, GameError> {
    if !mv.in_bounds() {
        return Err(GameError::OutOfBounds(mv));
    }
    if !board.is_empty(mv.row, mv.col) {
        return Err(GameError::OccupiedCell(mv));
    }
    Ok(apply_unchecked(board, mv))
}

/// Applies a move without validation (use [`apply_move`] instead).
///
/// Callers must pass a move drawn from [`legal_moves`] of this board.
pub(crate) fn apply_unchecked(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    next.set(mv.row, mv.col, Square::Occupied(current_player(board)));
    next
}

/// Returns true if the game is over: the board is full or won.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns the numeric outcome of a finished game.
///
/// `+1` if X has a winning line, `-1` if O does, `0` for a draw.
///
/// # Errors
///
/// Returns [`GameError::InvalidState`] if the game is still in
/// progress.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Result<i8, GameError> {
    if !is_terminal(board) {
        return Err(GameError::InvalidState);
    }
    Ok(score(board))
}

/// Scores a terminal board. Callers must have checked [`is_terminal`];
/// on a non-terminal board this returns 0 like an unfinished draw.
pub(crate) fn score(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_turn_alternates() {
        let board = Board::new();
        let board = apply_move(&board, Move::new(1, 1)).unwrap();
        assert_eq!(current_player(&board), Player::O);
        let board = apply_move(&board, Move::new(0, 0)).unwrap();
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_legal_moves_empty_board() {
        assert_eq!(legal_moves(&Board::new()).len(), 9);
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let moves = legal_moves(&Board::new());
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[8], Move::new(2, 2));
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::new();
        let next = apply_move(&board, Move::new(1, 1)).unwrap();
        assert!(board.is_empty(1, 1));
        assert_eq!(next.get(1, 1), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        let result = apply_move(&board, Move::new(3, 0));
        assert_eq!(result, Err(GameError::OutOfBounds(Move::new(3, 0))));
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::new();
        let board = apply_move(&board, Move::new(0, 0)).unwrap();
        let result = apply_move(&board, Move::new(0, 0));
        assert_eq!(result, Err(GameError::OccupiedCell(Move::new(0, 0))));
    }

    #[test]
    fn test_filled_cell_not_reoffered() {
        let board = apply_move(&Board::new(), Move::new(1, 1)).unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_outcome_non_terminal_rejected() {
        assert_eq!(outcome(&Board::new()), Err(GameError::InvalidState));
    }

    #[test]
    fn test_outcome_x_win() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::X));
        board.set(0, 1, Square::Occupied(Player::X));
        board.set(0, 2, Square::Occupied(Player::X));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Ok(1));
    }

    #[test]
    fn test_outcome_o_win() {
        let mut board = Board::new();
        board.set(2, 0, Square::Occupied(Player::O));
        board.set(2, 1, Square::Occupied(Player::O));
        board.set(2, 2, Square::Occupied(Player::O));
        assert_eq!(outcome(&board), Ok(-1));
    }

    #[test]
    fn test_is_terminal_iff_no_moves_or_winner() {
        let board = Board::new();
        assert_eq!(
            is_terminal(&board),
            legal_moves(&board).is_empty() || winner(&board).is_some()
        );

        let mut won = Board::new();
        won.set(0, 0, Square::Occupied(Player::X));
        won.set(1, 1, Square::Occupied(Player::X));
        won.set(2, 2, Square::Occupied(Player::X));
        assert!(is_terminal(&won));
        assert!(!legal_moves(&won).is_empty());
    }
}
