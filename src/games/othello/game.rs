//! Capture-game adapter.

use tracing::{debug, trace};

use super::board::{starting_pieces, OthelloBoard};
use crate::core::action::Action;
use crate::core::config::BoardConfig;
use crate::core::error::BoardError;
use crate::core::grid::{ForbiddenMask, Grid};
use crate::core::player::Player;
use crate::games::{render_grid, Glyphs};
use crate::rules::{BoardRules, Game, GameResult};
use crate::symmetry::SymmetrySet;

/// Generalized reversi over a board with forbidden cells.
///
/// Holds only the static configuration and the precomputed symmetry set;
/// every method works on the grid it is given.
#[derive(Clone, Debug)]
pub struct OthelloGame {
    config: BoardConfig,
    symmetries: SymmetrySet,
}

impl OthelloGame {
    /// Create a game from a validated config.
    ///
    /// The four centre starting cells must not be forbidden.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        for (pos, _) in starting_pieces(config.n) {
            if config.forbidden.is_forbidden(pos) {
                return Err(BoardError::ForbiddenStartingCell {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        let symmetries = SymmetrySet::preserving(&config.forbidden);
        debug!(
            n = config.n,
            forbidden = config.forbidden.count(),
            symmetries = symmetries.len(),
            "othello game configured"
        );
        Ok(Self { config, symmetries })
    }

    /// Create a game on an open `n x n` board.
    pub fn open(n: usize) -> Result<Self, BoardError> {
        Self::new(BoardConfig::new(n))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the shape-preserving symmetries.
    #[must_use]
    pub fn symmetry_set(&self) -> &SymmetrySet {
        &self.symmetries
    }

    /// Board over a copy of `grid`.
    fn board(&self, grid: &Grid) -> OthelloBoard {
        assert_eq!(
            grid.n(),
            self.config.n,
            "Grid side {} does not match game side {}",
            grid.n(),
            self.config.n
        );
        OthelloBoard::new(grid.clone())
    }
}

impl Game for OthelloGame {
    fn board_size(&self) -> (usize, usize) {
        (self.config.n, self.config.n)
    }

    fn forbidden(&self) -> &ForbiddenMask {
        &self.config.forbidden
    }

    fn initial_grid(&self) -> Grid {
        OthelloBoard::initial(&self.config.forbidden).into_grid()
    }

    fn next_state(&self, grid: &Grid, player: Player, action: usize) -> (Grid, Player) {
        match Action::from_index(action, self.config.n) {
            Action::Pass => {
                trace!(%player, "pass");
                (grid.clone(), player.opponent())
            }
            Action::Place(pos) => {
                let mut board = self.board(grid);
                board.execute_move(pos, player);
                (board.into_grid(), player.opponent())
            }
        }
    }

    fn valid_moves(&self, grid: &Grid, player: Player) -> Vec<bool> {
        let n = self.config.n;
        let mut valids = vec![false; self.action_size()];
        let moves = self.board(grid).legal_moves(player);
        if moves.is_empty() {
            valids[Action::pass_index(n)] = true;
            return valids;
        }
        for pos in moves {
            valids[pos.index(n)] = true;
        }
        valids
    }

    /// Ends only when neither side can move. A tied piece count is a loss
    /// for `player`: there is no draw outcome in this game.
    fn game_ended(&self, grid: &Grid, player: Player) -> GameResult {
        let board = self.board(grid);
        if board.has_legal_moves(player) || board.has_legal_moves(player.opponent()) {
            return GameResult::Ongoing;
        }
        let diff = board.count_diff(player);
        trace!(%player, diff, "othello game over");
        if diff > 0 {
            GameResult::Win
        } else {
            GameResult::Loss
        }
    }

    fn symmetries(&self, grid: &Grid, policy: &[f32]) -> Vec<(Grid, Vec<f32>)> {
        self.symmetries.expand(grid, policy)
    }

    fn score(&self, grid: &Grid, player: Player) -> i32 {
        self.board(grid).count_diff(player)
    }

    fn render(&self, grid: &Grid) -> String {
        render_grid(grid, Glyphs { white: 'W', black: 'b' })
    }
}
