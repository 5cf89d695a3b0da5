//! Exhaustive minimax search for tic-tac-toe.
//!
//! [`best_move`] explores the full game tree below a position, asking
//! the rules engine for legal moves and resulting boards and scoring
//! terminal leaves. The 3x3 state space is small enough to search to
//! the end, so no depth limit, evaluation heuristic, or transposition
//! table is needed.
//!
//! The only pruning is a win/loss short-circuit: because outcomes are
//! bounded to `{-1, 0, +1}`, a branch that forces `+1` for the
//! maximizer (or `-1` for the minimizer) cannot be improved upon, and
//! the remaining siblings are skipped. This is not general alpha-beta
//! pruning and deliberately stays that way.

use crate::action::Move;
use crate::rules;
use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the optimal move for the current player, or `None` if the
/// game is already over.
///
/// Assumes optimal adversarial play thereafter. Ties break in favor of
/// the first move in [`rules::legal_moves`] order that achieves the
/// best value, so results are reproducible run to run.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Move> {
    if rules::is_terminal(board) {
        return None;
    }

    let mut best: Option<(Move, i8)> = None;
    match rules::current_player(board) {
        Player::X => {
            for mv in rules::legal_moves(board) {
                let value = min_value(&rules::apply_unchecked(board, mv));
                if best.is_none_or(|(_, v)| value > v) {
                    best = Some((mv, value));
                    // A forced win cannot be improved upon.
                    if value == 1 {
                        break;
                    }
                }
            }
        }
        Player::O => {
            for mv in rules::legal_moves(board) {
                let value = max_value(&rules::apply_unchecked(board, mv));
                if best.is_none_or(|(_, v)| value < v) {
                    best = Some((mv, value));
                    if value == -1 {
                        break;
                    }
                }
            }
        }
    }

    best.map(|(mv, _)| mv)
}

/// Value of a position with the maximizer (X) to move.
fn max_value(board: &Board) -> i8 {
    if rules::is_terminal(board) {
        return rules::score(board);
    }

    let mut value = i8::MIN;
    for mv in rules::legal_moves(board) {
        value = value.max(min_value(&rules::apply_unchecked(board, mv)));
        if value == 1 {
            return value;
        }
    }
    value
}

/// Value of a position with the minimizer (O) to move.
fn min_value(board: &Board) -> i8 {
    if rules::is_terminal(board) {
        return rules::score(board);
    }

    let mut value = i8::MAX;
    for mv in rules::legal_moves(board) {
        value = value.min(max_value(&rules::apply_unchecked(board, mv)));
        if value == -1 {
            return value;
        }
    }
    value
}
