//! Core engine types: sides, board, dice, moves, RNG, configuration, errors.
//!
//! Everything here is plain data with value semantics. The rules that act on
//! it live in `crate::rules`.

pub mod side;
pub mod rng;
pub mod board;
pub mod dice;
pub mod action;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use board::{starting_position, Point, Position, SideState, SignedBoard, CHECKERS_PER_SIDE};
pub use dice::Dice;
pub use action::{Action, ActionRecord, Destination, Move, Origin};
pub use config::{FirstTurn, GameConfig};
pub use error::{EngineError, InvalidMove, Result};
