//! Alignment-game adapter.

use tracing::{debug, trace};

use super::board::TicTacToeBoard;
use crate::core::action::Action;
use crate::core::config::AlignmentConfig;
use crate::core::error::BoardError;
use crate::core::grid::{ForbiddenMask, Grid};
use crate::core::player::Player;
use crate::games::{render_grid, Glyphs};
use crate::rules::{BoardRules, Game, GameResult};
use crate::symmetry::SymmetrySet;

/// Generalized m,n,k game over a board with forbidden cells.
#[derive(Clone, Debug)]
pub struct TicTacToeGame {
    config: AlignmentConfig,
    symmetries: SymmetrySet,
}

impl TicTacToeGame {
    /// Create a game from a validated config.
    pub fn new(config: AlignmentConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let symmetries = SymmetrySet::preserving(&config.board.forbidden);
        debug!(
            n = config.board.n,
            winning_amount = config.winning_amount,
            forbidden = config.board.forbidden.count(),
            symmetries = symmetries.len(),
            "tictactoe game configured"
        );
        Ok(Self { config, symmetries })
    }

    /// Create a game on an open `n x n` board.
    pub fn open(n: usize, winning_amount: usize) -> Result<Self, BoardError> {
        Self::new(AlignmentConfig::new(n).with_winning_amount(winning_amount))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Get the shape-preserving symmetries.
    #[must_use]
    pub fn symmetry_set(&self) -> &SymmetrySet {
        &self.symmetries
    }

    fn board(&self, grid: &Grid) -> TicTacToeBoard<'_> {
        let n = self.config.board.n;
        assert_eq!(
            grid.n(),
            n,
            "Grid side {} does not match game side {}",
            grid.n(),
            n
        );
        TicTacToeBoard::new(grid.clone(), self.config.winning_amount, &self.config.board.forbidden)
    }
}

impl Game for TicTacToeGame {
    fn board_size(&self) -> (usize, usize) {
        (self.config.board.n, self.config.board.n)
    }

    fn forbidden(&self) -> &ForbiddenMask {
        &self.config.board.forbidden
    }

    fn initial_grid(&self) -> Grid {
        TicTacToeBoard::initial(&self.config.board.forbidden, self.config.winning_amount).into_grid()
    }

    fn next_state(&self, grid: &Grid, player: Player, action: usize) -> (Grid, Player) {
        match Action::from_index(action, self.config.board.n) {
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
        let n = self.config.board.n;
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

    /// A win for `player` is checked before a win for the opponent. A full
    /// board with no run is a draw.
    fn game_ended(&self, grid: &Grid, player: Player) -> GameResult {
        let board = self.board(grid);
        let result = if board.is_win(player) {
            GameResult::Win
        } else if board.is_win(player.opponent()) {
            GameResult::Loss
        } else if board.has_legal_moves(player) {
            return GameResult::Ongoing;
        } else {
            GameResult::Draw
        };
        trace!(%player, ?result, "tictactoe game over");
        result
    }

    fn symmetries(&self, grid: &Grid, policy: &[f32]) -> Vec<(Grid, Vec<f32>)> {
        self.symmetries.expand(grid, policy)
    }

    fn score(&self, grid: &Grid, player: Player) -> i32 {
        match self.game_ended(grid, player) {
            GameResult::Win => 1,
            GameResult::Loss => -1,
            GameResult::Ongoing | GameResult::Draw => 0,
        }
    }

    fn render(&self, grid: &Grid) -> String {
        render_grid(grid, Glyphs { white: 'O', black: 'X' })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Position;
    use crate::core::player::DISABLED;
    use crate::rules::DRAW_VALUE;

    #[test]
    fn test_action_size() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        assert_eq!(game.action_size(), 10);
        assert_eq!(game.board_size(), (3, 3));
    }

    #[test]
    fn test_rejects_bad_winning_amount() {
        assert!(matches!(
            TicTacToeGame::open(3, 4),
            Err(BoardError::InvalidWinningAmount { winning_amount: 4, n: 3 })
        ));
        assert!(TicTacToeGame::open(3, 0).is_err());
    }

    #[test]
    fn test_initial_grid_marks_forbidden() {
        let config = AlignmentConfig::new(4)
            .with_forbidden_positions(&[Position::new(1, 1)])
            .unwrap();
        let game = TicTacToeGame::new(config).unwrap();
        let grid = game.initial_grid();
        assert_eq!(grid.get(Position::new(1, 1)), DISABLED);
        assert_eq!(grid.count(0), 15);

        let valids = game.valid_moves(&grid, Player::White);
        assert!(!valids[5]);
        assert!(!valids[16]);
        assert_eq!(valids.iter().filter(|&&v| v).count(), 15);
    }

    #[test]
    fn test_next_state_places_and_alternates() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let (grid, player) = game.next_state(&game.initial_grid(), Player::White, 4);
        assert_eq!(grid.get(Position::new(1, 1)), 1);
        assert_eq!(player, Player::Black);

        let (grid, player) = game.next_state(&grid, player, 0);
        assert_eq!(grid.get(Position::new(0, 0)), -1);
        assert_eq!(player, Player::White);
    }

    #[test]
    fn test_game_ended_win_and_loss() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = Grid::from_rows(&[&[1, 1, 1], &[-1, -1, 0], &[0, 0, 0]]).unwrap();
        assert_eq!(game.game_ended(&grid, Player::White), GameResult::Win);
        assert_eq!(game.game_ended(&grid, Player::Black), GameResult::Loss);
        assert_eq!(game.score(&grid, Player::White), 1);
        assert_eq!(game.score(&grid, Player::Black), -1);
    }

    #[test]
    fn test_game_ended_ongoing() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = Grid::from_rows(&[&[1, -1, 0], &[0, 0, 0], &[0, 0, 0]]).unwrap();
        assert_eq!(game.game_ended(&grid, Player::White), GameResult::Ongoing);
        assert_eq!(game.game_ended(&grid, Player::White).value(), 0.0);
        assert_eq!(game.score(&grid, Player::White), 0);
    }

    #[test]
    fn test_full_board_is_draw() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = Grid::from_rows(&[&[1, -1, 1], &[1, -1, -1], &[-1, 1, 1]]).unwrap();
        let result = game.game_ended(&grid, Player::White);
        assert_eq!(result, GameResult::Draw);
        assert_eq!(result.value(), DRAW_VALUE);

        let valids = game.valid_moves(&grid, Player::White);
        assert!(valids[9]);
        assert_eq!(valids.iter().filter(|&&v| v).count(), 1);
    }

    #[test]
    fn test_forbidden_cells_count_as_filled_for_draw() {
        let config = AlignmentConfig::new(3)
            .with_forbidden_positions(&[Position::new(2, 2)])
            .unwrap();
        let game = TicTacToeGame::new(config).unwrap();
        let grid = Grid::from_rows(&[&[1, -1, 1], &[1, -1, -1], &[-1, 1, DISABLED]]).unwrap();
        assert_eq!(game.game_ended(&grid, Player::Black), GameResult::Draw);
    }

    #[test]
    fn test_pass_keeps_grid() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = game.initial_grid();
        let (next, player) = game.next_state(&grid, Player::Black, 9);
        assert_eq!(next, grid);
        assert_eq!(player, Player::White);
    }

    #[test]
    fn test_render_uses_tictactoe_glyphs() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = Grid::from_rows(&[&[1, 0, 0], &[0, -1, 0], &[0, 0, 0]]).unwrap();
        let text = game.render(&grid);
        assert!(text.contains("0 |O - - |"));
        assert!(text.contains("1 |- X - |"));
    }

    #[test]
    fn test_check_grid_rejects_mask_conflict() {
        let config = AlignmentConfig::new(3)
            .with_forbidden_positions(&[Position::new(2, 2)])
            .unwrap();
        let game = TicTacToeGame::new(config).unwrap();
        assert!(game.check_grid(&game.initial_grid()).is_ok());

        let open = Grid::from_rows(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]).unwrap();
        assert!(matches!(game.check_grid(&open), Err(BoardError::MaskConflict { index: 8 })));

        let extra = Grid::from_rows(&[&[DISABLED, 0, 0], &[0, 0, 0], &[0, 0, DISABLED]]).unwrap();
        assert!(matches!(game.check_grid(&extra), Err(BoardError::MaskConflict { index: 0 })));
    }

    #[test]
    fn test_check_grid_rejects_wrong_side() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let grid = TicTacToeGame::open(4, 3).unwrap().initial_grid();
        assert!(matches!(
            game.check_grid(&grid),
            Err(BoardError::MaskSizeMismatch { mask: 3, board: 4 })
        ));
    }

    #[test]
    #[should_panic(expected = "occupied cell")]
    fn test_next_state_on_occupied_cell_panics() {
        let game = TicTacToeGame::open(3, 3).unwrap();
        let (grid, _) = game.next_state(&game.initial_grid(), Player::White, 4);
        let _ = game.next_state(&grid, Player::Black, 4);
    }
}
