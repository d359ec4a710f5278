//! Game session configuration.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Who moves first after a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstTurn {
    /// Unbiased coin flip from the session RNG.
    Random,
    /// Always the given side.
    Fixed(Side),
}

/// Game session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for dice and the opening coin flip.
    /// Same seed produces the same rolls.
    pub seed: u64,

    /// First-turn policy applied on every reset.
    pub first_turn: FirstTurn,

    /// Reject steps whose action is not in the legal set for the roll.
    /// When off, steps only validate each move against the board.
    pub verify_legality: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_turn: FirstTurn::Random,
            verify_legality: true,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.first_turn = first_turn;
        self
    }

    pub fn with_legality_checks(mut self, enabled: bool) -> Self {
        self.verify_legality = enabled;
        self
    }
}
