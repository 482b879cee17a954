//! Errors for fallible construction and decoding.
//!
//! Rule violations during play (moving onto an occupied cell, an action
//! index past the end of the action space) are caller bugs and panic.
//! `BoardError` only covers data arriving from outside: grids, masks,
//! configs and serialized keys.

use thiserror::Error;

/// Error building or decoding board data.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board side must be at least 2, got {0}")]
    BoardTooSmall(usize),

    #[error("expected {expected} cells for the board, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("invalid cell value {value} at index {index}")]
    InvalidCell { index: usize, value: i8 },

    #[error("player value must be +1 or -1, got {0}")]
    InvalidPlayer(i8),

    #[error("forbidden mask is {mask}x{mask} but the board is {board}x{board}")]
    MaskSizeMismatch { mask: usize, board: usize },

    #[error("position ({row}, {col}) is outside a {n}x{n} board")]
    OutOfBounds { row: usize, col: usize, n: usize },

    #[error("winning amount {winning_amount} must be between 1 and {n}")]
    InvalidWinningAmount { winning_amount: usize, n: usize },

    #[error("starting cell ({row}, {col}) is forbidden")]
    ForbiddenStartingCell { row: usize, col: usize },

    #[error("grid cell at index {index} disagrees with the forbidden mask")]
    MaskConflict { index: usize },

    #[error("serialization failed: {0}")]
    Serialization(#[from] bincode::Error),
}
