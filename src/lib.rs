//! # rust-backgammon
//!
//! A backgammon rules engine for RL training.
//!
//! Given a position and a roll the engine enumerates every legal sequence of
//! checker moves, applies a chosen sequence to produce the successor
//! position, and detects and scores terminal positions. Agents, networks and
//! training loops live outside this crate and use it through
//! `reset -> roll -> legal_actions -> step`.
//!
//! ## Design Principles
//!
//! 1. **Values, not aliases**: positions are small `Copy` values. The legal
//!    move search hands each branch its own snapshot.
//!
//! 2. **Plain counts**: every point, the bar and the borne-off tray hold
//!    integer checker counts. Network encodings belong to the caller.
//!
//! 3. **Two sides, one flip**: per-side data lives in `SideMap`, indexed by
//!    `Side`, and `Side::opponent` is the only way to switch sides.
//!
//! ## Modules
//!
//! - `core`: sides, board, dice, moves, RNG, configuration, errors
//! - `rules`: legal move search, transitions, scoring, `RulesEngine`
//! - `session`: `Game` sessions with history and a seeded dice stream
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::{legal_actions, apply, outcome, starting_position, Dice};
//!
//! let position = starting_position();
//! let actions = legal_actions(&position, &Dice::from_pair(3, 3));
//! assert!(actions.iter().all(|a| a.len() == 4));
//!
//! let next = apply(&position, &actions[0]).unwrap();
//! assert!(next.check_invariants().is_ok());
//! assert_eq!(outcome(&next), None);
//! ```

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    starting_position, Action, ActionRecord, Destination, Dice, EngineError, FirstTurn, GameConfig, GameRng,
    GameRngState, InvalidMove, Move, Origin, Point, Position, Result, Side, SideMap, SideState, SignedBoard,
    CHECKERS_PER_SIDE,
};

pub use crate::rules::{
    apply, legal_actions, legal_afterstates, outcome, reward, simulate, Outcome, RulesEngine, StandardRules,
    WinKind,
};

pub use crate::session::{Game, GameBuilder, StepResult};
