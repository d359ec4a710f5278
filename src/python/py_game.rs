//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::{Dice, FirstTurn, GameConfig};
use crate::session::{Game, GameBuilder};

use super::py_core::{action_from_list, action_to_list, to_py_err, PyPosition, PySide};

fn dice_from(values: Vec<u8>) -> PyResult<Dice> {
    Dice::new(&values).map_err(to_py_err)
}

/// Python wrapper for a backgammon game session.
///
/// ```python
/// import rust_backgammon as bg
///
/// game = bg.Backgammon(seed=42)
/// while not game.done:
///     dice = game.roll()
///     action = game.legal_actions(dice)[0]
///     position, reward, done = game.step(dice, action)
/// ```
#[pyclass(name = "Backgammon")]
pub struct PyBackgammon {
    game: Game,
}

#[pymethods]
impl PyBackgammon {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for dice and the opening coin flip
    /// - first_turn: fixed first side, or None for a coin flip
    /// - verify_legality: reject actions outside the legal set
    #[new]
    #[pyo3(signature = (seed = 42, first_turn = None, verify_legality = true))]
    fn new(seed: u64, first_turn: Option<PySide>, verify_legality: bool) -> Self {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_first_turn(first_turn.map_or(FirstTurn::Random, |s| FirstTurn::Fixed(s.0)))
            .with_legality_checks(verify_legality);
        Self {
            game: GameBuilder::new().config(config).build(),
        }
    }

    /// Start a new game and return the opening position.
    fn reset(&mut self) -> PyPosition {
        PyPosition(self.game.reset())
    }

    /// Roll the dice; doubles come back as four values.
    fn roll(&mut self) -> Vec<u8> {
        self.game.roll().values().to_vec()
    }

    /// Legal actions for the side on turn, as lists of (origin, destination).
    fn legal_actions(&self, dice: Vec<u8>) -> PyResult<Vec<Vec<(i32, i32)>>> {
        let dice = dice_from(dice)?;
        Ok(self.game.legal_actions(&dice).iter().map(action_to_list).collect())
    }

    /// One (action, afterstate) pair per distinct resulting position.
    fn legal_afterstates(&self, dice: Vec<u8>) -> PyResult<Vec<(Vec<(i32, i32)>, PyPosition)>> {
        let dice = dice_from(dice)?;
        Ok(self
            .game
            .legal_afterstates(&dice)
            .iter()
            .map(|(action, position)| (action_to_list(action), PyPosition(*position)))
            .collect())
    }

    /// Commit an action. Returns (position, reward, done); reward is signed
    /// from White's perspective.
    fn step(&mut self, dice: Vec<u8>, action: Vec<(i32, i32)>) -> PyResult<(PyPosition, i8, bool)> {
        let dice = dice_from(dice)?;
        let action = action_from_list(action)?;
        let result = self.game.step(&dice, &action).map_err(to_py_err)?;
        Ok((PyPosition(result.position), result.reward, result.done))
    }

    /// The afterstate of an action without committing it.
    fn simulate(&self, action: Vec<(i32, i32)>) -> PyResult<PyPosition> {
        let action = action_from_list(action)?;
        self.game.simulate(&action).map(PyPosition).map_err(to_py_err)
    }

    /// Continue from an arbitrary position.
    fn set_position(&mut self, position: PyPosition) -> PyResult<()> {
        self.game.set_position(position.0).map_err(to_py_err)
    }

    /// (winner, magnitude) once the game is over.
    fn outcome(&self) -> Option<(PySide, u8)> {
        self.game.outcome().map(|o| (PySide(o.winner), o.magnitude()))
    }

    #[getter]
    fn position(&self) -> PyPosition {
        PyPosition(*self.game.position())
    }

    #[getter]
    fn turn(&self) -> PySide {
        PySide(self.game.turn())
    }

    #[getter]
    fn done(&self) -> bool {
        self.game.is_over()
    }

    #[getter]
    fn ply(&self) -> u32 {
        self.game.ply()
    }

    fn __repr__(&self) -> String {
        let status = match self.game.outcome() {
            Some(outcome) => outcome.to_string(),
            None => "ongoing".to_string(),
        };
        format!(
            "Backgammon(ply={}, turn={}, status={})",
            self.game.ply(),
            self.game.turn(),
            status
        )
    }
}
