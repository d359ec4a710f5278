//! Rules engine trait.
//!
//! Game sessions and agents talk to the rules through `RulesEngine`:
//! - What actions are legal for a roll
//! - How an action changes the position
//! - When the game is over, and for how much

use rustc_hash::FxHashSet;

use crate::core::{Action, Dice, Position, Result, Side};

use super::outcome::{self, Outcome};
use super::{search, transition};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: never empty; return `[Action::pass()]` when nothing plays
/// - `apply_action`: must be deterministic and must not modify its input
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// The opening position with `first` on turn.
    fn initial_position(&self, first: Side) -> Position;

    /// Every legal action for the side on turn.
    fn legal_actions(&self, position: &Position, dice: &Dice) -> Vec<Action>;

    /// Apply an action for the side on turn and pass the turn.
    fn apply_action(&self, position: &Position, action: &Action) -> Result<Position>;

    /// Check if the game is over.
    fn is_terminal(&self, position: &Position) -> Option<Outcome>;

    // === Convenience Methods ===

    /// The afterstate of `action` without committing to it.
    fn simulate(&self, position: &Position, action: &Action) -> Result<Position> {
        self.apply_action(position, action)
    }

    /// Is `action` one of the legal actions for this roll?
    fn is_legal(&self, position: &Position, dice: &Dice, action: &Action) -> bool {
        self.legal_actions(position, dice).contains(action)
    }

    /// One legal action per distinct afterstate.
    ///
    /// Default implementation simulates every legal action.
    fn legal_afterstates(&self, position: &Position, dice: &Dice) -> Vec<(Action, Position)> {
        let mut seen = FxHashSet::default();
        self.legal_actions(position, dice)
            .into_iter()
            .filter_map(|action| {
                let after = self.simulate(position, &action).ok()?;
                seen.insert(after).then_some((action, after))
            })
            .collect()
    }
}

/// Standard backgammon rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn initial_position(&self, first: Side) -> Position {
        Position::starting(first)
    }

    fn legal_actions(&self, position: &Position, dice: &Dice) -> Vec<Action> {
        search::legal_actions(position, dice)
    }

    fn apply_action(&self, position: &Position, action: &Action) -> Result<Position> {
        transition::apply(position, action)
    }

    fn is_terminal(&self, position: &Position) -> Option<Outcome> {
        outcome::outcome(position)
    }

    fn legal_afterstates(&self, position: &Position, dice: &Dice) -> Vec<(Action, Position)> {
        search::legal_afterstates(position, dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uses every default method.
    struct Delegating;

    impl RulesEngine for Delegating {
        fn initial_position(&self, first: Side) -> Position {
            StandardRules.initial_position(first)
        }

        fn legal_actions(&self, position: &Position, dice: &Dice) -> Vec<Action> {
            StandardRules.legal_actions(position, dice)
        }

        fn apply_action(&self, position: &Position, action: &Action) -> Result<Position> {
            StandardRules.apply_action(position, action)
        }

        fn is_terminal(&self, position: &Position) -> Option<Outcome> {
            StandardRules.is_terminal(position)
        }
    }

    #[test]
    fn test_default_afterstates_match_search() {
        let position = StandardRules.initial_position(Side::Black);
        let dice = Dice::from_pair(6, 5);

        let mut fast: Vec<_> = StandardRules.legal_afterstates(&position, &dice).into_iter().map(|(_, p)| p).collect();
        let mut slow: Vec<_> = Delegating.legal_afterstates(&position, &dice).into_iter().map(|(_, p)| p).collect();
        let key = |p: &Position| p.to_signed(Side::White).points;
        fast.sort_by_key(key);
        slow.sort_by_key(key);

        assert_eq!(fast, slow);
    }

    #[test]
    fn test_is_legal() {
        let position = StandardRules.initial_position(Side::White);
        let dice = Dice::from_pair(4, 2);
        let actions = StandardRules.legal_actions(&position, &dice);

        assert!(Delegating.is_legal(&position, &dice, &actions[0]));
        assert!(!Delegating.is_legal(&position, &dice, &Action::pass()));
    }

    #[test]
    fn test_simulate_does_not_commit() {
        let position = StandardRules.initial_position(Side::White);
        let actions = StandardRules.legal_actions(&position, &Dice::from_pair(1, 2));
        let after = Delegating.simulate(&position, &actions[0]).unwrap();

        assert_ne!(after, position);
        assert_eq!(position, StandardRules.initial_position(Side::White));
        assert_eq!(Delegating.is_terminal(&after), None);
    }
}
