//! Board positions and the flat action index space.
//!
//! Policies are indexed by action: `row * n + col` for a placement and
//! `n * n` for pass. `Action` is the decoded form of one index.

use serde::{Deserialize, Serialize};

/// A cell on an `n x n` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of side `n`.
    #[must_use]
    pub const fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// Inverse of `index`.
    #[must_use]
    pub const fn from_index(index: usize, n: usize) -> Self {
        Self {
            row: index / n,
            col: index % n,
        }
    }

    /// Step by a signed offset, returning `None` when leaving the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, n: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < n && col < n).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A decoded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a piece on a cell.
    Place(Position),
    /// Skip the turn.
    Pass,
}

impl Action {
    /// Size of the action space for a board of side `n`.
    #[must_use]
    pub const fn space_size(n: usize) -> usize {
        n * n + 1
    }

    /// Index of the pass action on a board of side `n`.
    #[must_use]
    pub const fn pass_index(n: usize) -> usize {
        n * n
    }

    /// Decode an action index.
    ///
    /// Panics if `index` is outside `[0, n * n]`.
    #[must_use]
    pub fn from_index(index: usize, n: usize) -> Self {
        assert!(
            index <= n * n,
            "Action index {} out of range for a {}x{} board",
            index,
            n,
            n
        );
        if index == n * n {
            Action::Pass
        } else {
            Action::Place(Position::from_index(index, n))
        }
    }

    /// Encode this action as an index.
    #[must_use]
    pub const fn to_index(self, n: usize) -> usize {
        match self {
            Action::Place(pos) => pos.index(n),
            Action::Pass => n * n,
        }
    }

    /// Check if this is the pass action.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Action::Pass)
    }
}
