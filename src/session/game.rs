//! Game session implementation.

use im::Vector;

use crate::core::{
    Action, ActionRecord, Dice, EngineError, FirstTurn, GameConfig, GameRng, GameRngState, Position, Result,
    Side,
};
use crate::rules::{Outcome, RulesEngine, StandardRules};

/// What a committed step produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Position after the step, opponent on turn.
    pub position: Position,
    /// Set when the step ended the game.
    pub outcome: Option<Outcome>,
    /// Signed reward from White's perspective (0 unless `done`).
    pub reward: i8,
    pub done: bool,
}

/// A live game: the position, the dice stream, and the move history.
///
/// Cloning is cheap: the position is a plain value and the history is a
/// persistent vector.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine = StandardRules> {
    rules: R,
    config: GameConfig,
    rng: GameRng,
    position: Position,
    history: Vector<ActionRecord>,
    outcome: Option<Outcome>,
}

/// Builder for creating a Game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    rng_state: Option<GameRngState>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.config.first_turn = first_turn;
        self
    }

    pub fn verify_legality(mut self, enabled: bool) -> Self {
        self.config.verify_legality = enabled;
        self
    }

    /// Resume a saved dice stream instead of starting from the seed.
    ///
    /// The snapshot is loaded after the opening reset, so the first roll
    /// of the built game is the first roll after the snapshot was taken.
    pub fn rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Build a reset game with the standard rules.
    pub fn build(self) -> Game {
        self.build_with_rules(StandardRules)
    }

    /// Build a reset game with custom rules.
    pub fn build_with_rules<R: RulesEngine>(self, rules: R) -> Game<R> {
        let rng = GameRng::new(self.config.seed);
        let mut game = Game {
            position: rules.initial_position(Side::White),
            rules,
            config: self.config,
            rng,
            history: Vector::new(),
            outcome: None,
        };
        game.reset();
        if let Some(state) = &self.rng_state {
            game.set_rng_state(state);
        }
        game
    }
}

impl<R: RulesEngine> Game<R> {
    /// Start a new game from the opening position.
    ///
    /// The first side comes from the configured policy; `Random` flips a
    /// fair coin from the session RNG. The dice stream continues, so
    /// successive games in one session differ.
    pub fn reset(&mut self) -> Position {
        let first = match self.config.first_turn {
            FirstTurn::Random => {
                if self.rng.gen_bool(0.5) {
                    Side::White
                } else {
                    Side::Black
                }
            }
            FirstTurn::Fixed(side) => side,
        };
        self.position = self.rules.initial_position(first);
        self.history.clear();
        self.outcome = None;
        log::debug!("reset: {} moves first", first);
        self.position
    }

    /// Roll the dice for the side on turn.
    pub fn roll(&mut self) -> Dice {
        Dice::roll(&mut self.rng)
    }

    /// Legal actions for the side on turn with `dice`.
    pub fn legal_actions(&self, dice: &Dice) -> Vec<Action> {
        self.rules.legal_actions(&self.position, dice)
    }

    /// One legal action per distinct afterstate for `dice`.
    pub fn legal_afterstates(&self, dice: &Dice) -> Vec<(Action, Position)> {
        self.rules.legal_afterstates(&self.position, dice)
    }

    /// Commit `action` for the side on turn.
    ///
    /// With `verify_legality` the action must be one of `legal_actions(dice)`;
    /// otherwise only the individual moves are validated. Nothing changes
    /// when an error is returned.
    pub fn step(&mut self, dice: &Dice, action: &Action) -> Result<StepResult> {
        if self.outcome.is_some() {
            return Err(EngineError::GameOver);
        }
        let side = self.position.turn();
        if self.config.verify_legality && !self.rules.is_legal(&self.position, dice, action) {
            log::warn!("rejected {} for {} with {}", action, side, dice);
            return Err(EngineError::IllegalAction);
        }

        let next = self.rules.apply_action(&self.position, action).map_err(|e| {
            log::warn!("rejected {} for {}: {}", action, side, e);
            e
        })?;

        let ply = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(side, dice.clone(), action.clone(), ply));
        self.position = next;
        self.outcome = self.rules.is_terminal(&next);
        log::trace!("ply {}: {} played {} with {}", ply, side, action, dice);

        if let Some(outcome) = self.outcome {
            log::debug!("game over after {} plies: {}", ply + 1, outcome);
        }

        Ok(StepResult {
            position: next,
            outcome: self.outcome,
            reward: self.outcome.map_or(0, |o| o.reward()),
            done: self.outcome.is_some(),
        })
    }

    /// The afterstate of `action` without committing it.
    pub fn simulate(&self, action: &Action) -> Result<Position> {
        self.rules.simulate(&self.position, action)
    }

    /// Continue from an arbitrary position, clearing the history.
    ///
    /// The position is validated first.
    pub fn set_position(&mut self, position: Position) -> Result<()> {
        position.check_invariants()?;
        self.position = position;
        self.history.clear();
        self.outcome = self.rules.is_terminal(&position);
        Ok(())
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The side on turn.
    pub fn turn(&self) -> Side {
        self.position.turn()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Committed steps since the last reset.
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Snapshot of the dice stream, to reproduce the remaining rolls.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the dice stream from a snapshot taken by [`Game::rng_state`].
    pub fn set_rng_state(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
        log::debug!("dice stream restored at word {}", state.word_pos);
    }
}
