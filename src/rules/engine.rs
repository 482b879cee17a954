//! Rules traits for game implementations.
//!
//! Two layers, both implemented once per game:
//! - `BoardRules`: mechanics on a single owned grid (legality, execution)
//! - `Game`: the action-indexed surface a self-play controller drives
//!
//! `Game` methods are pure: every call takes the grid it needs and returns
//! new values. Implementations hold only static configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::action::{Action, Position};
use crate::core::error::BoardError;
use crate::core::grid::{ForbiddenMask, Grid};
use crate::core::player::Player;

/// Draws are reported as a small positive value, not zero, so that a
/// finished drawn game is distinguishable from an ongoing one.
pub const DRAW_VALUE: f32 = 1e-4;

/// Game status from one player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game continues.
    Ongoing,
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// The game ended without a winner.
    Draw,
}

impl GameResult {
    /// Numeric value in the learning framework's convention.
    ///
    /// `0` ongoing, `1` win, `-1` loss, `DRAW_VALUE` draw.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            GameResult::Ongoing => 0.0,
            GameResult::Win => 1.0,
            GameResult::Loss => -1.0,
            GameResult::Draw => DRAW_VALUE,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

/// Board mechanics for one game.
///
/// A board owns its grid for the duration of one adapter call. Moves passed
/// to `execute_move` must come from `legal_moves`; boards only assert the
/// target cell is empty.
pub trait BoardRules {
    /// Board side length.
    fn n(&self) -> usize;

    /// Read the grid.
    fn grid(&self) -> &Grid;

    /// Take the grid back out of the board.
    fn into_grid(self) -> Grid
    where
        Self: Sized;

    /// Check if `player` may move at `pos`.
    fn is_legal_move(&self, pos: Position, player: Player) -> bool;

    /// All cells `player` may move at. Iteration order is unspecified.
    fn legal_moves(&self, player: Player) -> FxHashSet<Position> {
        self.grid()
            .positions()
            .filter(|&pos| self.is_legal_move(pos, player))
            .collect()
    }

    /// Check if `player` has any legal move.
    fn has_legal_moves(&self, player: Player) -> bool {
        self.grid().positions().any(|pos| self.is_legal_move(pos, player))
    }

    /// Play `player`'s piece at `pos`.
    ///
    /// Panics if the cell is not empty.
    fn execute_move(&mut self, pos: Position, player: Player);
}

/// Uniform action-indexed interface over one game's rules.
///
/// Actions are indices into `0..action_size()`; the last index is pass.
/// Policies passed to `symmetries` have one entry per action.
pub trait Game {
    /// Board dimensions `(n, n)`.
    fn board_size(&self) -> (usize, usize);

    /// Number of actions, including pass.
    fn action_size(&self) -> usize {
        let (n, _) = self.board_size();
        Action::space_size(n)
    }

    /// Cells that are never playable.
    fn forbidden(&self) -> &ForbiddenMask;

    /// Check that a grid from outside the crate fits this game: same side,
    /// and disabled exactly where the mask forbids.
    fn check_grid(&self, grid: &Grid) -> Result<(), BoardError> {
        grid.check_mask(self.forbidden())
    }

    /// Starting grid.
    fn initial_grid(&self) -> Grid;

    /// Apply `action` for `player`, returning the new grid and the next player.
    ///
    /// The action must be valid; it is not re-checked.
    fn next_state(&self, grid: &Grid, player: Player, action: usize) -> (Grid, Player);

    /// One flag per action; exactly the pass flag is set when `player` cannot move.
    fn valid_moves(&self, grid: &Grid, player: Player) -> Vec<bool>;

    /// Game status from `player`'s point of view.
    fn game_ended(&self, grid: &Grid, player: Player) -> GameResult;

    /// Grid seen from `player`'s side.
    fn canonical_form(&self, grid: &Grid, player: Player) -> Grid {
        grid.canonical(player)
    }

    /// Shape-preserving rotations and reflections of a grid and its policy.
    fn symmetries(&self, grid: &Grid, policy: &[f32]) -> Vec<(Grid, Vec<f32>)>;

    /// Exact-match lookup key for a grid.
    fn string_representation(&self, grid: &Grid) -> Result<Vec<u8>, BoardError> {
        grid.to_key()
    }

    /// Game-specific score for `player`.
    fn score(&self, grid: &Grid, player: Player) -> i32;

    /// Human-readable rendering.
    fn render(&self, grid: &Grid) -> String;
}
