//! Python bindings for the backgammon engine.
//!
//! Exposes game sessions to Python trainers (TD-learning, Q-learning) that
//! consume `reset`, `legal_actions`, `step` and `simulate`.
//!
//! # Quick Start
//!
//! ```python
//! import rust_backgammon as bg
//!
//! game = bg.Backgammon(seed=42)
//! dice = game.roll()
//! for action, after in game.legal_afterstates(dice):
//!     print(action, after.signed(game.turn))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rust_backgammon: a backgammon rules engine for RL training.
#[pymodule]
fn rust_backgammon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySide>()?;
    m.add_class::<PyPosition>()?;
    m.add_class::<PyBackgammon>()?;

    m.add("BAR", py_core::BAR)?;
    m.add("OFF", py_core::OFF)?;

    Ok(())
}
