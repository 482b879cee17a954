//! Capture-game board mechanics.
//!
//! A move is legal on an empty cell when, in at least one of the eight
//! compass directions, it brackets a contiguous run of opposing pieces
//! against one of the mover's own pieces. Empty cells, disabled cells and
//! the board edge all end a run without capturing it.

use smallvec::SmallVec;

use crate::core::action::Position;
use crate::core::grid::{ForbiddenMask, Grid};
use crate::core::player::Player;
use crate::rules::BoardRules;

/// The eight compass offsets as `(row, col)` steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Pieces captured along one direction.
type Run = SmallVec<[Position; 8]>;

/// Capture-game board over an owned grid.
#[derive(Clone, Debug)]
pub struct OthelloBoard {
    grid: Grid,
}

impl OthelloBoard {
    /// Wrap an existing grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Starting position: forbidden cells disabled and the centre 2x2
    /// seeded with `+1` on the anti-diagonal and `-1` on the diagonal.
    #[must_use]
    pub fn initial(mask: &ForbiddenMask) -> Self {
        let mut grid = Grid::with_mask(mask);
        for (pos, player) in starting_pieces(mask.n()) {
            grid.set(pos, player.sign());
        }
        Self { grid }
    }

    /// Opposing pieces `player` would flip along one direction from `origin`.
    ///
    /// Empty when the direction does not capture.
    fn captured_run(&self, origin: Position, (d_row, d_col): (isize, isize), player: Player) -> Run {
        let n = self.grid.n();
        let own = player.sign();
        let opposing = player.opponent().sign();
        let mut run = Run::new();
        let mut pos = origin;

        while let Some(next) = pos.offset(d_row, d_col, n) {
            let value = self.grid.get(next);
            if value == opposing {
                run.push(next);
                pos = next;
            } else if value == own {
                return run;
            } else {
                break;
            }
        }
        Run::new()
    }

    /// All pieces a move at `pos` would flip, across every direction.
    #[must_use]
    pub fn flips(&self, pos: Position, player: Player) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .flat_map(|&d| self.captured_run(pos, d, player))
            .collect()
    }

    /// `player`'s piece count minus the opponent's. Disabled cells don't count.
    #[must_use]
    pub fn count_diff(&self, player: Player) -> i32 {
        let own = player.sign();
        self.grid
            .cells()
            .iter()
            .map(|&v| {
                if v == own {
                    1
                } else if v == -own {
                    -1
                } else {
                    0
                }
            })
            .sum()
    }
}

/// The four centre pieces of a fresh board.
pub(crate) fn starting_pieces(n: usize) -> [(Position, Player); 4] {
    let half = n / 2;
    [
        (Position::new(half - 1, half), Player::White),
        (Position::new(half, half - 1), Player::White),
        (Position::new(half - 1, half - 1), Player::Black),
        (Position::new(half, half), Player::Black),
    ]
}

impl BoardRules for OthelloBoard {
    fn n(&self) -> usize {
        self.grid.n()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn into_grid(self) -> Grid {
        self.grid
    }

    fn is_legal_move(&self, pos: Position, player: Player) -> bool {
        self.grid.is_empty_at(pos)
            && DIRECTIONS
                .iter()
                .any(|&d| !self.captured_run(pos, d, player).is_empty())
    }

    fn execute_move(&mut self, pos: Position, player: Player) {
        assert!(
            self.grid.is_empty_at(pos),
            "Cannot play {} on occupied or disabled cell {}",
            player,
            pos
        );
        let flips = self.flips(pos, player);
        self.grid.set(pos, player.sign());
        for flipped in flips {
            self.grid.set(flipped, player.sign());
        }
    }
}
