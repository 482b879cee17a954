//! Shape-aware symmetry expansion for training-data augmentation.
//!
//! A board with forbidden cells is only symmetric under the transforms that
//! map its forbidden mask onto itself. `SymmetrySet` records those once per
//! game; `expand` applies them to a (grid, policy) pair.
//!
//! ## Policy layout
//!
//! Policies have `n * n` cell entries followed by one pass entry. The cell
//! entries move with the grid; the pass entry is carried unchanged.

mod transform;

pub use transform::Symmetry;

use smallvec::SmallVec;

use crate::core::grid::{ForbiddenMask, Grid};

/// The transforms that preserve a board's playable shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetrySet {
    symmetries: SmallVec<[Symmetry; 8]>,
}

impl SymmetrySet {
    /// Find every transform that maps `mask` onto itself.
    ///
    /// Each candidate is applied to the original mask, so the identity is
    /// always included.
    #[must_use]
    pub fn preserving(mask: &ForbiddenMask) -> Self {
        let n = mask.n();
        let symmetries = Symmetry::ALL
            .iter()
            .copied()
            .filter(|sym| sym.apply(mask.cells(), n) == mask.cells())
            .collect();
        Self { symmetries }
    }

    /// Check if a transform preserves the board shape.
    #[must_use]
    pub fn contains(&self, symmetry: Symmetry) -> bool {
        self.symmetries.contains(&symmetry)
    }

    /// Number of preserving transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symmetries.len()
    }

    /// Check if no transform preserves the shape.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symmetries.is_empty()
    }

    /// Iterate over preserving transforms in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = Symmetry> + '_ {
        self.symmetries.iter().copied()
    }

    /// Produce every shape-preserving image of a grid and its policy.
    ///
    /// Falls back to the untouched pair when the set is empty.
    ///
    /// Panics if `policy.len() != n * n + 1`.
    #[must_use]
    pub fn expand(&self, grid: &Grid, policy: &[f32]) -> Vec<(Grid, Vec<f32>)> {
        let n = grid.n();
        assert_eq!(
            policy.len(),
            n * n + 1,
            "Policy must have one entry per cell plus pass"
        );

        if self.symmetries.is_empty() {
            return vec![(grid.clone(), policy.to_vec())];
        }

        let (cell_policy, pass) = policy.split_at(n * n);
        self.iter()
            .map(|sym| {
                let cells = sym.apply(grid.cells(), n);
                let mut pi = sym.apply(cell_policy, n);
                pi.extend_from_slice(pass);
                (Grid::from_raw(n, cells), pi)
            })
            .collect()
    }
}
