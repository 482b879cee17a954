//! Board contents and the forbidden-cell mask.
//!
//! ## Grid
//!
//! An `n x n` row-major array of `i8` cell values: `EMPTY`, `+1`, `-1` or
//! `DISABLED`. Grids are plain values: adapters take them by reference and
//! return new ones, never mutating the caller's copy.
//!
//! ## ForbiddenMask
//!
//! Fixed at game construction. A forbidden cell is never playable and is
//! stored on the grid as `DISABLED`.

use serde::{Deserialize, Serialize};

use super::action::Position;
use super::error::BoardError;
use super::player::{Player, DISABLED, EMPTY};

/// Cells that are permanently out of play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForbiddenMask {
    n: usize,
    cells: Vec<bool>,
}

impl ForbiddenMask {
    /// Create a mask with no forbidden cells.
    #[must_use]
    pub fn open(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Create a mask from row-major flags.
    pub fn from_cells(n: usize, cells: Vec<bool>) -> Result<Self, BoardError> {
        if cells.len() != n * n {
            return Err(BoardError::CellCountMismatch {
                expected: n * n,
                actual: cells.len(),
            });
        }
        Ok(Self { n, cells })
    }

    /// Create a mask forbidding the listed positions.
    pub fn from_positions(n: usize, positions: &[Position]) -> Result<Self, BoardError> {
        let mut mask = Self::open(n);
        for &pos in positions {
            if pos.row >= n || pos.col >= n {
                return Err(BoardError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                    n,
                });
            }
            mask.cells[pos.index(n)] = true;
        }
        Ok(mask)
    }

    /// Board side length.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row-major flags.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Check if a cell is forbidden.
    #[must_use]
    pub fn is_forbidden(&self, pos: Position) -> bool {
        self.cells[pos.index(self.n)]
    }

    /// Number of forbidden cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&f| f).count()
    }

    /// Check if no cell is forbidden.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.cells.iter().any(|&f| f)
    }
}

/// Board contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    n: usize,
    cells: Vec<i8>,
}

impl Grid {
    /// Create an empty grid with the mask's forbidden cells disabled.
    #[must_use]
    pub fn with_mask(mask: &ForbiddenMask) -> Self {
        let cells = mask
            .cells
            .iter()
            .map(|&forbidden| if forbidden { DISABLED } else { EMPTY })
            .collect();
        Self { n: mask.n, cells }
    }

    /// Create a grid from row-major cell values.
    ///
    /// Every value must be `EMPTY`, `+1`, `-1` or `DISABLED`.
    pub fn from_cells(n: usize, cells: Vec<i8>) -> Result<Self, BoardError> {
        if cells.len() != n * n {
            return Err(BoardError::CellCountMismatch {
                expected: n * n,
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &v)| !matches!(v, EMPTY | 1 | -1 | DISABLED))
        {
            return Err(BoardError::InvalidCell { index, value });
        }
        Ok(Self { n, cells })
    }

    /// Build a grid from values already known to be valid.
    pub(crate) fn from_raw(n: usize, cells: Vec<i8>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Create a grid from rows, mostly for tests and fixtures.
    pub fn from_rows(rows: &[&[i8]]) -> Result<Self, BoardError> {
        let n = rows.len();
        let cells: Vec<i8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_cells(n, cells)
    }

    /// Check that disabled cells are exactly the mask's forbidden cells.
    pub fn check_mask(&self, mask: &ForbiddenMask) -> Result<(), BoardError> {
        if mask.n != self.n {
            return Err(BoardError::MaskSizeMismatch {
                mask: mask.n,
                board: self.n,
            });
        }
        match self
            .cells
            .iter()
            .zip(&mask.cells)
            .position(|(&v, &forbidden)| (v == DISABLED) != forbidden)
        {
            Some(index) => Err(BoardError::MaskConflict { index }),
            None => Ok(()),
        }
    }

    /// Board side length.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Consume the grid, returning its cell values.
    #[must_use]
    pub fn into_cells(self) -> Vec<i8> {
        self.cells
    }

    /// Get a cell value.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> i8 {
        self.cells[pos.index(self.n)]
    }

    /// Set a cell value.
    #[inline]
    pub fn set(&mut self, pos: Position, value: i8) {
        let n = self.n;
        self.cells[pos.index(n)] = value;
    }

    /// Check if a cell is empty (and therefore not disabled).
    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.n;
        (0..n * n).map(move |i| Position::from_index(i, n))
    }

    /// Count cells holding `value`.
    #[must_use]
    pub fn count(&self, value: i8) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// View the grid from `player`'s side: their pieces become `+1`.
    ///
    /// Disabled cells keep their sentinel.
    #[must_use]
    pub fn canonical(&self, player: Player) -> Self {
        let sign = player.sign();
        let cells = self
            .cells
            .iter()
            .map(|&v| if v == DISABLED { v } else { v * sign })
            .collect();
        Self { n: self.n, cells }
    }

    /// Encode as an exact-match lookup key.
    pub fn to_key(&self) -> Result<Vec<u8>, BoardError> {
        Ok(bincode::serialize(&self.cells)?)
    }

    /// Decode a key produced by `to_key`.
    pub fn from_key(n: usize, key: &[u8]) -> Result<Self, BoardError> {
        let cells: Vec<i8> = bincode::deserialize(key)?;
        Self::from_cells(n, cells)
    }
}
