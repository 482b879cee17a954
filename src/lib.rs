//! # board-rules
//!
//! Rules engines for two square-board games with forbidden cells, shaped
//! for AlphaZero-style self-play training.
//!
//! ## Games
//!
//! - **Othello**: generalized reversi. Moves must bracket and flip runs of
//!   opposing pieces; a player with no move passes.
//!
//! - **TicTacToe**: generalized m,n,k. The first run of `winning_amount`
//!   pieces along a row, column or full diagonal wins.
//!
//! Both games take a forbidden-cell mask at construction. Forbidden cells
//! are stored as a `DISABLED` sentinel in the grid, are never playable, and
//! break capture lines and runs.
//!
//! ## Design Principles
//!
//! 1. **Pure adapters**: `Game` methods take a grid and return new values.
//!    Games hold only configuration and a precomputed symmetry set.
//!
//! 2. **Flat action space**: `row * n + col` places a piece, `n * n` passes.
//!
//! 3. **Shape-aware augmentation**: only the rotations and reflections that
//!    map the forbidden mask onto itself are used for training symmetries.
//!
//! ## Modules
//!
//! - `core`: players, cell values, positions, actions, grids, config, RNG
//! - `rules`: `BoardRules` and `Game` traits, `GameResult`
//! - `symmetry`: D4 transforms and shape-preserving expansion
//! - `games`: Othello and TicTacToe
//! - `rollout`: seeded random self-play

pub mod core;
pub mod games;
pub mod rollout;
pub mod rules;
pub mod symmetry;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, AlignmentConfig, BoardConfig, BoardError, ForbiddenMask, GameRng, Grid, Player, Position, DISABLED,
    EMPTY,
};

pub use crate::games::{OthelloBoard, OthelloGame, TicTacToeBoard, TicTacToeGame};

pub use crate::rollout::{play_random_game, Rollout, RolloutConfig, Step};

pub use crate::rules::{BoardRules, Game, GameResult, DRAW_VALUE};

pub use crate::symmetry::{Symmetry, SymmetrySet};
