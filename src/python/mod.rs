//! Python bindings for the board rules.
//!
//! Exposes both games with the numpy calling convention of AlphaZero-style
//! training loops.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import board_rules
//!
//! game = board_rules.OthelloGame(n=6, forbidden=[(0, 0), (5, 5)])
//! board = game.getInitBoard()
//! valids = game.getValidMoves(board, 1)
//! board, player = game.getNextState(board, 1, int(np.flatnonzero(valids)[0]))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::BoardError;

mod py_games;

pub use py_games::*;

impl From<BoardError> for PyErr {
    fn from(err: BoardError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// board_rules: capture and alignment board games with forbidden cells.
#[pymodule]
fn board_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOthelloGame>()?;
    m.add_class::<PyTicTacToeGame>()?;
    Ok(())
}
