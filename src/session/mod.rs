//! Game sessions: a live position with its dice stream and history.
//!
//! The call pattern for one ply is `roll() -> legal_actions(dice) ->
//! step(dice, action)`, repeated until `step` reports `done`.
//!
//! ```
//! use rust_backgammon::session::GameBuilder;
//!
//! let mut game = GameBuilder::new().seed(7).build();
//! while !game.is_over() && game.ply() < 20 {
//!     let dice = game.roll();
//!     let action = game.legal_actions(&dice)[0].clone();
//!     game.step(&dice, &action).unwrap();
//! }
//! assert!(game.position().check_invariants().is_ok());
//! ```

mod game;

pub use game::{Game, GameBuilder, StepResult};
