//! Random self-play rollouts.
//!
//! Drives any `Game` from its initial grid with uniformly random valid
//! actions until the game ends or a move cap is hit. Used to exercise the
//! rules end to end and to benchmark them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::grid::Grid;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::rules::{Game, GameResult};

/// Configuration for a random rollout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Maximum actions before the game is abandoned, passes included.
    pub max_moves: usize,

    /// Seed for action selection.
    pub seed: u64,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            max_moves: 500,
            seed: 0,
        }
    }
}

impl RolloutConfig {
    /// Create a config with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

/// One decision in a rollout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Grid before the action.
    pub grid: Grid,

    /// Player to move.
    pub player: Player,

    /// Action index taken.
    pub action: usize,
}

/// A finished (or abandoned) rollout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rollout {
    /// Every decision in order.
    pub steps: Vec<Step>,

    /// Grid after the last action.
    pub final_grid: Grid,

    /// Player to move on `final_grid`.
    pub final_player: Player,

    /// Status from `final_player`'s point of view. `Ongoing` if the move
    /// cap was hit.
    pub result: GameResult,

    /// Status from the other player's point of view. Not always the mirror
    /// of `result`: a tied Othello game is a loss for both sides.
    pub opponent_result: GameResult,

    /// Seed the rollout was played with.
    pub seed: u64,
}

impl Rollout {
    /// Number of actions taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no action was taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Result from `player`'s point of view.
    #[must_use]
    pub fn result_for(&self, player: Player) -> GameResult {
        if player == self.final_player {
            self.result
        } else {
            self.opponent_result
        }
    }
}

/// Play one game with uniformly random valid actions. White moves first.
pub fn play_random_game<G: Game>(game: &G, config: &RolloutConfig) -> Rollout {
    let mut rng = GameRng::new(config.seed);
    let mut grid = game.initial_grid();
    let mut player = Player::White;
    let mut steps = Vec::new();
    let mut result = game.game_ended(&grid, player);

    while !result.is_terminal() && steps.len() < config.max_moves {
        let valid: Vec<usize> = game
            .valid_moves(&grid, player)
            .iter()
            .enumerate()
            .filter_map(|(action, &ok)| ok.then_some(action))
            .collect();
        // valid_moves always sets at least the pass flag
        let Some(&action) = rng.choose(&valid) else {
            break;
        };

        let (next_grid, next_player) = game.next_state(&grid, player, action);
        steps.push(Step { grid, player, action });
        grid = next_grid;
        player = next_player;
        result = game.game_ended(&grid, player);
    }

    let opponent_result = game.game_ended(&grid, player.opponent());
    debug!(
        seed = rng.seed(),
        moves = steps.len(),
        ?result,
        ?opponent_result,
        final_player = %player,
        "rollout finished"
    );

    Rollout {
        steps,
        final_grid: grid,
        final_player: player,
        result,
        opponent_result,
        seed: rng.seed(),
    }
}
