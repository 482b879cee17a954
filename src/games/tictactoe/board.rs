//! Alignment-game board mechanics.
//!
//! Any empty, non-forbidden cell is playable by either side. A player wins
//! with `winning_amount` consecutive pieces along a row, a column, or one of
//! the two diagonals that run corner to corner. Shorter diagonals are not
//! scanned.

use crate::core::action::Position;
use crate::core::grid::{ForbiddenMask, Grid};
use crate::core::player::Player;
use crate::rules::BoardRules;

/// Alignment-game board over an owned grid.
#[derive(Clone, Debug)]
pub struct TicTacToeBoard<'m> {
    grid: Grid,
    winning_amount: usize,
    forbidden: &'m ForbiddenMask,
}

impl<'m> TicTacToeBoard<'m> {
    /// Wrap an existing grid.
    #[must_use]
    pub fn new(grid: Grid, winning_amount: usize, forbidden: &'m ForbiddenMask) -> Self {
        Self {
            grid,
            winning_amount,
            forbidden,
        }
    }

    /// Empty board with forbidden cells disabled.
    #[must_use]
    pub fn initial(forbidden: &'m ForbiddenMask, winning_amount: usize) -> Self {
        Self::new(Grid::with_mask(forbidden), winning_amount, forbidden)
    }

    /// Run length needed to win.
    #[must_use]
    pub fn winning_amount(&self) -> usize {
        self.winning_amount
    }

    /// Check whether `player` has a winning run.
    #[must_use]
    pub fn is_win(&self, player: Player) -> bool {
        let n = self.grid.n();
        let rows = (0..n).map(|row| (0..n).map(move |col| Position::new(row, col)).collect::<Vec<_>>());
        let cols = (0..n).map(|col| (0..n).map(move |row| Position::new(row, col)).collect::<Vec<_>>());
        let diagonal = (0..n).map(|d| Position::new(d, d)).collect::<Vec<_>>();
        let anti_diagonal = (0..n).map(|d| Position::new(d, n - 1 - d)).collect::<Vec<_>>();

        rows.chain(cols)
            .chain([diagonal, anti_diagonal])
            .any(|line| self.has_run(&line, player))
    }

    /// Check a line of cells for `winning_amount` consecutive pieces.
    fn has_run(&self, line: &[Position], player: Player) -> bool {
        let own = player.sign();
        let mut count = 0;
        for &pos in line {
            if self.grid.get(pos) == own {
                count += 1;
                if count == self.winning_amount {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }
}

impl BoardRules for TicTacToeBoard<'_> {
    fn n(&self) -> usize {
        self.grid.n()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn into_grid(self) -> Grid {
        self.grid
    }

    /// Placement legality does not depend on the player.
    fn is_legal_move(&self, pos: Position, _player: Player) -> bool {
        self.grid.is_empty_at(pos) && !self.forbidden.is_forbidden(pos)
    }

    fn execute_move(&mut self, pos: Position, player: Player) {
        assert!(
            self.grid.is_empty_at(pos),
            "Cannot play {} on occupied cell {}",
            player,
            pos
        );
        assert!(
            !self.forbidden.is_forbidden(pos),
            "Cannot play {} on forbidden cell {}",
            player,
            pos
        );
        self.grid.set(pos, player.sign());
    }
}
