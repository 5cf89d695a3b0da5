//! Tic-tac-toe rules engine and exhaustive minimax solver.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] as an immutable-by-convention value over
//!   [`Square`] marks
//! - **Rules**: pure functions for turns, legal moves, move
//!   application, and terminal/outcome evaluation
//! - **Search**: [`best_move`], a full-tree minimax with a win/loss
//!   short-circuit
//!
//! Rendering, input handling, and driver loops are left to callers;
//! the crate performs no I/O and holds no state across calls.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{rules, search, Board, Move};
//!
//! let board = Board::new();
//! let board = rules::apply_move(&board, Move::new(1, 1))?;
//!
//! // The engine replies with the optimal move for O.
//! let reply = search::best_move(&board).expect("game in progress");
//! let board = rules::apply_move(&board, reply)?;
//! assert!(!rules::is_terminal(&board));
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod types;

pub mod rules;
pub mod search;

pub use action::Move;
pub use error::GameError;
pub use search::best_move;
pub use types::{Board, Player, Square};

/// Alias for clarity when a cell mark is meant rather than an actor.
pub type Mark = Player;
