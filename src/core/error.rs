//! Engine error types.

use super::action::Move;
use super::side::Side;

/// Why a single move cannot be applied to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("no checker on the origin point")]
    EmptyOrigin,

    #[error("no checker on the bar")]
    EmptyBar,

    #[error("checkers on the bar must enter first")]
    BarNotEmpty,

    #[error("destination is not ahead of the origin")]
    Backwards,

    #[error("destination is farther than one die can reach")]
    TooFar,

    #[error("destination blocked by {0} opposing checkers")]
    Blocked(u8),

    #[error("cannot bear off while checkers remain outside the home board")]
    NotAllHome,
}

/// Errors surfaced by the rules engine and game sessions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid action: move {mv} rejected ({reason})")]
    InvalidAction { mv: Move, reason: InvalidMove },

    #[error("action is not legal for this roll")]
    IllegalAction,

    #[error("invariant violated for {side}: {detail}")]
    InvariantViolation { side: Side, detail: String },

    #[error("invalid dice {0:?}: expected 1-4 values in 1..=6")]
    InvalidDice(Vec<u8>),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, EngineError>;
