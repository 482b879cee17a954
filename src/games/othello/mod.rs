//! Generalized reversi.
//!
//! ## Rules
//! - The centre 2x2 starts with two pieces per side on opposite diagonals
//! - A move must flip at least one bracketed run of opposing pieces
//! - A player with no move passes (action `n * n`)
//! - The game ends when neither side can move; more pieces wins
//!
//! Forbidden cells are never playable and block capture lines.

mod board;
mod game;

pub use board::OthelloBoard;
pub use game::OthelloGame;
