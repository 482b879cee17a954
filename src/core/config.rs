//! Game configuration types.
//!
//! Each game is configured once at construction:
//! - `BoardConfig`: board side and forbidden cells (both games)
//! - `AlignmentConfig`: adds the run length needed to win (alignment game)
//!
//! Configs are plain serde values. `validate` is called by the game
//! constructors, so a config loaded from disk is checked before use.

use serde::{Deserialize, Serialize};

use super::action::Position;
use super::error::BoardError;
use super::grid::ForbiddenMask;

/// Board shape shared by both games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board side length.
    pub n: usize,

    /// Cells that are never playable.
    pub forbidden: ForbiddenMask,
}

impl BoardConfig {
    /// Create a config for an open `n x n` board.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            forbidden: ForbiddenMask::open(n),
        }
    }

    /// Replace the forbidden mask.
    #[must_use]
    pub fn with_forbidden(mut self, mask: ForbiddenMask) -> Self {
        self.forbidden = mask;
        self
    }

    /// Forbid the listed positions.
    pub fn with_forbidden_positions(mut self, positions: &[Position]) -> Result<Self, BoardError> {
        self.forbidden = ForbiddenMask::from_positions(self.n, positions)?;
        Ok(self)
    }

    /// Check the board side and mask size.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.n < 2 {
            return Err(BoardError::BoardTooSmall(self.n));
        }
        if self.forbidden.n() != self.n {
            return Err(BoardError::MaskSizeMismatch {
                mask: self.forbidden.n(),
                board: self.n,
            });
        }
        if self.forbidden.cells().len() != self.n * self.n {
            return Err(BoardError::CellCountMismatch {
                expected: self.n * self.n,
                actual: self.forbidden.cells().len(),
            });
        }
        Ok(())
    }
}

/// Configuration for the alignment (m,n,k) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Board shape.
    pub board: BoardConfig,

    /// Run length that wins (default: 3).
    pub winning_amount: usize,
}

impl AlignmentConfig {
    /// Create a config for an open `n x n` board with runs of 3.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            board: BoardConfig::new(n),
            winning_amount: 3,
        }
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_winning_amount(mut self, winning_amount: usize) -> Self {
        self.winning_amount = winning_amount;
        self
    }

    /// Replace the forbidden mask.
    #[must_use]
    pub fn with_forbidden(mut self, mask: ForbiddenMask) -> Self {
        self.board = self.board.with_forbidden(mask);
        self
    }

    /// Forbid the listed positions.
    pub fn with_forbidden_positions(mut self, positions: &[Position]) -> Result<Self, BoardError> {
        self.board = self.board.with_forbidden_positions(positions)?;
        Ok(self)
    }

    /// Check the board and that a winning run fits on it.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.board.validate()?;
        if self.winning_amount == 0 || self.winning_amount > self.board.n {
            return Err(BoardError::InvalidWinningAmount {
                winning_amount: self.winning_amount,
                n: self.board.n,
            });
        }
        Ok(())
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_config_builder() {
        let config = BoardConfig::new(4)
            .with_forbidden_positions(&[Position::new(0, 0), Position::new(3, 3)])
            .unwrap();

        assert_eq!(config.n, 4);
        assert_eq!(config.forbidden.count(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_config_too_small() {
        assert!(matches!(BoardConfig::new(1).validate(), Err(BoardError::BoardTooSmall(1))));
    }

    #[test]
    fn test_board_config_mask_mismatch() {
        let config = BoardConfig::new(4).with_forbidden(ForbiddenMask::open(3));
        assert!(matches!(
            config.validate(),
            Err(BoardError::MaskSizeMismatch { mask: 3, board: 4 })
        ));
    }

    #[test]
    fn test_alignment_config_defaults() {
        let config = AlignmentConfig::default();
        assert_eq!(config.board.n, 3);
        assert_eq!(config.winning_amount, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alignment_config_winning_amount_bounds() {
        assert!(AlignmentConfig::new(3).with_winning_amount(4).validate().is_err());
        assert!(AlignmentConfig::new(3).with_winning_amount(0).validate().is_err());
        assert!(AlignmentConfig::new(5).with_winning_amount(4).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AlignmentConfig::new(4)
            .with_winning_amount(3)
            .with_forbidden(ForbiddenMask::from_positions(4, &[Position::new(1, 2)]).unwrap());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AlignmentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
