//! Core types shared by both games: players, positions, actions, grids,
//! configuration, errors and RNG.
//!
//! Nothing here knows a game's rules. Games build on these types in
//! `crate::games`.

pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod player;
pub mod rng;

pub use action::{Action, Position};
pub use config::{AlignmentConfig, BoardConfig};
pub use error::BoardError;
pub use grid::{ForbiddenMask, Grid};
pub use player::{Player, DISABLED, EMPTY};
pub use rng::GameRng;
