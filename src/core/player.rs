//! Player identification and cell values.
//!
//! ## Player
//!
//! Two-sided games only: `White` is stored on the grid as `+1`, `Black` as
//! `-1`. The sign is what canonical form multiplies by.
//!
//! ## Cell values
//!
//! Grids store raw `i8` values so they can cross the numpy boundary
//! unchanged. `DISABLED` marks a permanently forbidden cell and is never
//! negated.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Value of an empty cell.
pub const EMPTY: i8 = 0;

/// Value of a permanently disabled cell.
pub const DISABLED: i8 = 2;

/// One side of a two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, stored as `+1`.
    White,
    /// Stored as `-1`.
    Black,
}

impl Player {
    /// Get the cell value for this player's pieces.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Convert a `±1` value, panicking on anything else.
    ///
    /// Use `Player::try_from` when the value comes from outside the crate.
    #[must_use]
    pub fn from_sign(sign: i8) -> Self {
        match Self::try_from(sign) {
            Ok(player) => player,
            Err(_) => panic!("Player value must be +1 or -1, got {}", sign),
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = BoardError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::White),
            -1 => Ok(Player::Black),
            other => Err(BoardError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> Self {
        player.sign()
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White(+1)"),
            Player::Black => write!(f, "Black(-1)"),
        }
    }
}
