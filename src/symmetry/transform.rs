//! Elements of the square's dihedral group.
//!
//! A `Symmetry` is `rotations` quarter turns counter-clockwise followed by
//! an optional left-right flip, matching numpy's `rot90` then `fliplr`.
//! Transforms act on row-major square arrays of any element type, so the
//! same element moves a grid, a mask and a policy in lockstep.

use serde::{Deserialize, Serialize};

use crate::core::action::Position;

/// One rotation/reflection of an `n x n` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Quarter turns counter-clockwise, `1..=4` (4 is a full turn).
    pub rotations: u8,
    /// Flip left-right after rotating.
    pub flip: bool,
}

impl Symmetry {
    /// All eight elements in enumeration order: quarter turns 1 to 4, each
    /// flipped then unflipped. The identity is last.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::new(1, true),
        Symmetry::new(1, false),
        Symmetry::new(2, true),
        Symmetry::new(2, false),
        Symmetry::new(3, true),
        Symmetry::new(3, false),
        Symmetry::new(4, true),
        Symmetry::new(4, false),
    ];

    /// The identity transform.
    pub const IDENTITY: Symmetry = Symmetry::new(4, false);

    /// Create a transform.
    #[must_use]
    pub const fn new(rotations: u8, flip: bool) -> Self {
        Self { rotations, flip }
    }

    /// Check if this transform leaves every cell in place.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.rotations % 4 == 0 && !self.flip
    }

    /// Cell of the input that lands on `target` in the output.
    #[must_use]
    pub fn source(self, target: Position, n: usize) -> Position {
        let (mut row, mut col) = (target.row, target.col);
        if self.flip {
            col = n - 1 - col;
        }
        for _ in 0..self.rotations % 4 {
            let (r, c) = (col, n - 1 - row);
            row = r;
            col = c;
        }
        Position::new(row, col)
    }

    /// Transform a row-major `n x n` array.
    ///
    /// Panics if `cells.len() != n * n`.
    #[must_use]
    pub fn apply<T: Copy>(self, cells: &[T], n: usize) -> Vec<T> {
        assert_eq!(cells.len(), n * n, "Expected {} cells for a {}x{} board", n * n, n, n);
        (0..n * n)
            .map(|i| cells[self.source(Position::from_index(i, n), n).index(n)])
            .collect()
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let degrees = u16::from(self.rotations % 4) * 90;
        if self.flip {
            write!(f, "rot{}+flip", degrees)
        } else {
            write!(f, "rot{}", degrees)
        }
    }
}
