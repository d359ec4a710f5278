//! Core type bindings for Python.
//!
//! Moves cross the boundary as `(origin, destination)` integer pairs in the
//! mover's frame: origin `-1` is the bar, destination `24` is off the board.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Destination, EngineError, Move, Origin, Point, Position, Side};

pub(crate) const BAR: i32 = -1;
pub(crate) const OFF: i32 = Point::COUNT as i32;

pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

pub(crate) fn move_to_tuple(mv: &Move) -> (i32, i32) {
    let origin = match mv.origin {
        Origin::Bar => BAR,
        Origin::Point(p) => p.index() as i32,
    };
    let destination = match mv.destination {
        Destination::Point(p) => p.index() as i32,
        Destination::Off => OFF,
    };
    (origin, destination)
}

pub(crate) fn move_from_tuple((origin, destination): (i32, i32)) -> PyResult<Move> {
    let point = |index: i32| {
        usize::try_from(index)
            .ok()
            .and_then(Point::try_new)
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("point {index} out of range")))
    };
    let origin = if origin == BAR {
        Origin::Bar
    } else {
        Origin::Point(point(origin)?)
    };
    let destination = if destination == OFF {
        Destination::Off
    } else {
        Destination::Point(point(destination)?)
    };
    Ok(Move::new(origin, destination))
}

pub(crate) fn action_to_list(action: &Action) -> Vec<(i32, i32)> {
    action.iter().map(move_to_tuple).collect()
}

pub(crate) fn action_from_list(moves: Vec<(i32, i32)>) -> PyResult<Action> {
    let moves = moves.into_iter().map(move_from_tuple).collect::<PyResult<Vec<_>>>()?;
    Ok(Action::from_moves(&moves))
}

/// Python wrapper for Side.
#[pyclass(name = "Side", eq, hash, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PySide(pub Side);

#[pymethods]
impl PySide {
    #[staticmethod]
    fn white() -> Self {
        Self(Side::White)
    }

    #[staticmethod]
    fn black() -> Self {
        Self(Side::Black)
    }

    /// 0 for White, 1 for Black.
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Side.{}", self.0)
    }
}

/// Python wrapper for Position.
#[pyclass(name = "Position", eq, hash, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PyPosition(pub Position);

#[pymethods]
impl PyPosition {
    /// The standard opening position.
    #[staticmethod]
    #[pyo3(signature = (first = PySide(Side::White)))]
    fn starting(first: PySide) -> Self {
        Self(Position::starting(first.0))
    }

    /// Build from the signed 24-point view of `perspective`.
    #[staticmethod]
    fn from_signed(
        perspective: PySide,
        points: [i8; 24],
        bar: (u8, u8),
        borne_off: (u8, u8),
        turn: PySide,
    ) -> PyResult<Self> {
        use crate::core::{SideMap, SignedBoard};
        let board = SignedBoard {
            perspective: perspective.0,
            points,
            bar: SideMap::from_pair(bar.0, bar.1),
            borne_off: SideMap::from_pair(borne_off.0, borne_off.1),
            turn: turn.0,
        };
        Position::from_signed(&board).map(Self).map_err(to_py_err)
    }

    #[getter]
    fn turn(&self) -> PySide {
        PySide(self.0.turn())
    }

    /// Checker counts for `side` in its own frame.
    fn points(&self, side: PySide) -> Vec<u8> {
        self.0.side(side.0).points.to_vec()
    }

    fn bar(&self, side: PySide) -> u8 {
        self.0.side(side.0).bar
    }

    fn borne_off(&self, side: PySide) -> u8 {
        self.0.side(side.0).borne_off
    }

    fn pip_count(&self, side: PySide) -> u32 {
        self.0.pip_count(side.0)
    }

    /// Signed counts from `perspective`'s frame: positive for that side.
    fn signed(&self, perspective: PySide) -> Vec<i8> {
        self.0.to_signed(perspective.0).points.to_vec()
    }

    fn check_invariants(&self) -> PyResult<()> {
        self.0.check_invariants().map_err(to_py_err)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Position(turn={}, off=({}, {}))",
            self.0.turn(),
            self.0.side(Side::White).borne_off,
            self.0.side(Side::Black).borne_off
        )
    }
}
