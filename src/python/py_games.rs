//! Game bindings for Python.
//!
//! Boards cross the boundary as `(n, n)` float32 arrays: `1.0` and `-1.0`
//! for pieces, `0.0` for empty, `NaN` for forbidden cells. Policies are flat
//! lists of `n * n + 1` floats.

use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{AlignmentConfig, BoardConfig, Grid, Player, Position, DISABLED};
use crate::games::{OthelloGame, TicTacToeGame};
use crate::rules::Game;

/// Convert a numpy board into a grid.
fn grid_from_array(board: &PyReadonlyArray2<'_, f32>) -> PyResult<Grid> {
    let view = board.as_array();
    let (rows, cols) = view.dim();
    if rows != cols {
        return Err(PyValueError::new_err(format!(
            "Board must be square, got {}x{}",
            rows, cols
        )));
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for &value in view.iter() {
        let cell = if value.is_nan() {
            DISABLED
        } else if value == 0.0 || value == 1.0 || value == -1.0 {
            value as i8
        } else {
            return Err(PyValueError::new_err(format!("Invalid board value {}", value)));
        };
        cells.push(cell);
    }
    Ok(Grid::from_cells(rows, cells)?)
}

/// Convert a numpy board and check it against the game's side and mask.
fn grid_for<G: Game>(game: &G, board: &PyReadonlyArray2<'_, f32>) -> PyResult<Grid> {
    let grid = grid_from_array(board)?;
    game.check_grid(&grid)?;
    Ok(grid)
}

/// Convert a grid into a numpy board.
fn grid_to_array<'py>(py: Python<'py>, grid: &Grid) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let n = grid.n();
    let values: Vec<f32> = grid
        .cells()
        .iter()
        .map(|&v| if v == DISABLED { f32::NAN } else { f32::from(v) })
        .collect();
    PyArray1::from_vec_bound(py, values).reshape([n, n])
}

fn player_from(value: i64) -> PyResult<Player> {
    i8::try_from(value)
        .ok()
        .and_then(|v| Player::try_from(v).ok())
        .ok_or_else(|| PyValueError::new_err(format!("Player must be 1 or -1, got {}", value)))
}

fn forbidden_positions(forbidden: Option<Vec<(usize, usize)>>) -> Vec<Position> {
    forbidden
        .unwrap_or_default()
        .into_iter()
        .map(Position::from)
        .collect()
}

fn next_state_internal<'py, G: Game>(
    game: &G,
    py: Python<'py>,
    board: PyReadonlyArray2<'_, f32>,
    player: i64,
    action: usize,
) -> PyResult<(Bound<'py, PyArray2<f32>>, i64)> {
    if action >= game.action_size() {
        return Err(PyValueError::new_err(format!(
            "Action {} out of range 0..{}",
            action,
            game.action_size()
        )));
    }
    let grid = grid_for(game, &board)?;
    let (next, next_player) = game.next_state(&grid, player_from(player)?, action);
    Ok((grid_to_array(py, &next)?, i64::from(next_player.sign())))
}

fn valid_moves_internal<'py, G: Game>(
    game: &G,
    py: Python<'py>,
    board: PyReadonlyArray2<'_, f32>,
    player: i64,
) -> PyResult<Bound<'py, PyArray1<bool>>> {
    let grid = grid_for(game, &board)?;
    Ok(PyArray1::from_vec_bound(py, game.valid_moves(&grid, player_from(player)?)))
}

fn game_ended_internal<G: Game>(game: &G, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<f32> {
    let grid = grid_for(game, &board)?;
    Ok(game.game_ended(&grid, player_from(player)?).value())
}

fn canonical_form_internal<'py, G: Game>(
    game: &G,
    py: Python<'py>,
    board: PyReadonlyArray2<'_, f32>,
    player: i64,
) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let grid = grid_for(game, &board)?;
    grid_to_array(py, &game.canonical_form(&grid, player_from(player)?))
}

#[allow(clippy::type_complexity)]
fn symmetries_internal<'py, G: Game>(
    game: &G,
    py: Python<'py>,
    board: PyReadonlyArray2<'_, f32>,
    pi: Vec<f32>,
) -> PyResult<Vec<(Bound<'py, PyArray2<f32>>, Vec<f32>)>> {
    if pi.len() != game.action_size() {
        return Err(PyValueError::new_err(format!(
            "Policy must have {} entries, got {}",
            game.action_size(),
            pi.len()
        )));
    }
    let grid = grid_for(game, &board)?;
    game.symmetries(&grid, &pi)
        .into_iter()
        .map(|(g, p)| Ok((grid_to_array(py, &g)?, p)))
        .collect()
}

fn string_representation_internal<'py, G: Game>(
    game: &G,
    py: Python<'py>,
    board: PyReadonlyArray2<'_, f32>,
) -> PyResult<Bound<'py, PyBytes>> {
    let grid = grid_for(game, &board)?;
    let key = game.string_representation(&grid)?;
    Ok(PyBytes::new_bound(py, &key))
}

/// Python wrapper for the capture game.
#[pyclass(name = "OthelloGame")]
pub struct PyOthelloGame {
    game: OthelloGame,
}

#[pymethods]
impl PyOthelloGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - n: Board side length
    /// - forbidden: (row, col) cells that are never playable
    #[new]
    #[pyo3(signature = (n = 8, forbidden = None))]
    fn new(n: usize, forbidden: Option<Vec<(usize, usize)>>) -> PyResult<Self> {
        let config = BoardConfig::new(n).with_forbidden_positions(&forbidden_positions(forbidden))?;
        Ok(Self {
            game: OthelloGame::new(config)?,
        })
    }

    #[pyo3(name = "getInitBoard")]
    fn init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        grid_to_array(py, &self.game.initial_grid())
    }

    #[pyo3(name = "getBoardSize")]
    fn board_size(&self) -> (usize, usize) {
        self.game.board_size()
    }

    #[pyo3(name = "getActionSize")]
    fn action_size(&self) -> usize {
        self.game.action_size()
    }

    #[pyo3(name = "getNextState")]
    fn next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<f32>>, i64)> {
        next_state_internal(&self.game, py, board, player, action)
    }

    #[pyo3(name = "getValidMoves")]
    fn valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray1<bool>>> {
        valid_moves_internal(&self.game, py, board, player)
    }

    #[pyo3(name = "getGameEnded")]
    fn game_ended(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<f32> {
        game_ended_internal(&self.game, board, player)
    }

    #[pyo3(name = "getCanonicalForm")]
    fn canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        canonical_form_internal(&self.game, py, board, player)
    }

    #[pyo3(name = "getSymmetries")]
    #[allow(clippy::type_complexity)]
    fn symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        pi: Vec<f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<f32>>, Vec<f32>)>> {
        symmetries_internal(&self.game, py, board, pi)
    }

    #[pyo3(name = "stringRepresentation")]
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        string_representation_internal(&self.game, py, board)
    }

    #[pyo3(name = "getScore")]
    fn score(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<i32> {
        Ok(self.game.score(&grid_for(&self.game, &board)?, player_from(player)?))
    }

    fn display(&self, board: PyReadonlyArray2<'_, f32>) -> PyResult<String> {
        Ok(self.game.render(&grid_for(&self.game, &board)?))
    }

    fn __repr__(&self) -> String {
        let config = self.game.config();
        format!(
            "OthelloGame(n={}, forbidden={}, symmetries={})",
            config.n,
            config.forbidden.count(),
            self.game.symmetry_set().len()
        )
    }
}

/// Python wrapper for the alignment game.
#[pyclass(name = "TicTacToeGame")]
pub struct PyTicTacToeGame {
    game: TicTacToeGame,
}

#[pymethods]
impl PyTicTacToeGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - n: Board side length
    /// - winning_amount: Run length that wins
    /// - forbidden: (row, col) cells that are never playable
    #[new]
    #[pyo3(signature = (n = 3, winning_amount = 3, forbidden = None))]
    fn new(n: usize, winning_amount: usize, forbidden: Option<Vec<(usize, usize)>>) -> PyResult<Self> {
        let config = AlignmentConfig::new(n)
            .with_winning_amount(winning_amount)
            .with_forbidden_positions(&forbidden_positions(forbidden))?;
        Ok(Self {
            game: TicTacToeGame::new(config)?,
        })
    }

    #[pyo3(name = "getInitBoard")]
    fn init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        grid_to_array(py, &self.game.initial_grid())
    }

    #[pyo3(name = "getBoardSize")]
    fn board_size(&self) -> (usize, usize) {
        self.game.board_size()
    }

    #[pyo3(name = "getActionSize")]
    fn action_size(&self) -> usize {
        self.game.action_size()
    }

    #[pyo3(name = "getNextState")]
    fn next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<f32>>, i64)> {
        next_state_internal(&self.game, py, board, player, action)
    }

    #[pyo3(name = "getValidMoves")]
    fn valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray1<bool>>> {
        valid_moves_internal(&self.game, py, board, player)
    }

    #[pyo3(name = "getGameEnded")]
    fn game_ended(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<f32> {
        game_ended_internal(&self.game, board, player)
    }

    #[pyo3(name = "getCanonicalForm")]
    fn canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        canonical_form_internal(&self.game, py, board, player)
    }

    #[pyo3(name = "getSymmetries")]
    #[allow(clippy::type_complexity)]
    fn symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
        pi: Vec<f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<f32>>, Vec<f32>)>> {
        symmetries_internal(&self.game, py, board, pi)
    }

    #[pyo3(name = "stringRepresentation")]
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, f32>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        string_representation_internal(&self.game, py, board)
    }

    #[pyo3(name = "getScore")]
    fn score(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<i32> {
        Ok(self.game.score(&grid_for(&self.game, &board)?, player_from(player)?))
    }

    fn display(&self, board: PyReadonlyArray2<'_, f32>) -> PyResult<String> {
        Ok(self.game.render(&grid_for(&self.game, &board)?))
    }

    fn __repr__(&self) -> String {
        let config = self.game.config();
        format!(
            "TicTacToeGame(n={}, winning_amount={}, forbidden={})",
            config.board.n,
            config.winning_amount,
            config.board.forbidden.count()
        )
    }
}
