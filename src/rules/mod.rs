//! Backgammon rules: legal move search, transitions, and scoring.
//!
//! - `search`: every legal action for a position and roll
//! - `transition`: apply an action to produce the successor position
//! - `outcome`: terminal detection and signed rewards
//! - `engine`: the `RulesEngine` trait tying them together

pub mod engine;
pub mod outcome;
pub mod search;
pub mod transition;

pub use engine::{RulesEngine, StandardRules};
pub use outcome::{outcome, reward, Outcome, WinKind};
pub use search::{legal_actions, legal_afterstates, playable_move};
pub use transition::{apply, simulate, validate_move};
