//! Rules traits for game implementations.
//!
//! Games implement `BoardRules` for their board mechanics and `Game` for
//! the action-indexed surface:
//! - Legal moves and the valid-action mask
//! - How actions produce the next grid
//! - Terminal detection and scoring
//!
//! Both traits are implemented per game without a shared base type.

pub mod engine;

pub use engine::{BoardRules, Game, GameResult, DRAW_VALUE};
