//! Generalized m,n,k alignment game.
//!
//! ## Rules
//! - Players alternate placing one piece on any open cell
//! - `winning_amount` in a row along a row, column or full diagonal wins
//! - A full board with no run is a draw
//!
//! Forbidden cells are never playable and break runs.

mod board;
mod game;

pub use board::TicTacToeBoard;
pub use game::TicTacToeGame;
