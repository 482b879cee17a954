//! Game implementations.
//!
//! - `othello`: generalized reversi on an `n x n` board with forbidden cells
//! - `tictactoe`: generalized m,n,k alignment game with forbidden cells
//!
//! Each game has a board (`BoardRules`) and an adapter (`Game`).

pub mod othello;
pub mod tictactoe;

pub use othello::{OthelloBoard, OthelloGame};
pub use tictactoe::{TicTacToeBoard, TicTacToeGame};

use std::fmt::Write;

use crate::core::grid::Grid;
use crate::core::player::{DISABLED, EMPTY};

/// Text glyphs for each cell value.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Glyphs {
    pub white: char,
    pub black: char,
}

/// Render a grid with column and row labels.
///
/// Disabled cells show as `/`, empty cells as `-`.
pub(crate) fn render_grid(grid: &Grid, glyphs: Glyphs) -> String {
    let n = grid.n();
    let rule = format!("  {}\n", "-".repeat(2 * n + 1));
    let mut out = String::from("   ");
    for col in 0..n {
        let _ = write!(out, "{} ", col);
    }
    out.push('\n');
    out.push_str(&rule);

    for (row, cells) in grid.cells().chunks(n).enumerate() {
        let _ = write!(out, "{} |", row);
        for &value in cells {
            let glyph = match value {
                EMPTY => '-',
                DISABLED => '/',
                1 => glyphs.white,
                _ => glyphs.black,
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out
}
