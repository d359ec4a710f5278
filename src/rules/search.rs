//! Legal action search.
//!
//! Enumerates every sequence of moves the side on turn may play for a roll.
//!
//! ## Algorithm
//!
//! Depth-first over the remaining dice. Each call owns its own `Position`
//! snapshot, so sibling branches never observe each other's moves and the
//! caller's position is never touched.
//!
//! At every depth:
//! - With checkers on the bar, only bar entries are generated.
//! - Otherwise every checker may move by every distinct remaining die value,
//!   subject to blocking and the bear-off rules.
//! - The first remaining die is also dropped unplayed, so shorter sequences
//!   are found when longer ones do not exist.
//!
//! Afterwards only the sequences using the most dice survive. That set is
//! then narrowed by the larger-die rule: when a non-double roll allows a
//! single die only, sequences playing the smaller die are dropped if the
//! larger die can be played. Trying every distinct die value at each depth
//! makes the result independent of the order of the dice.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Action, Destination, Dice, Move, Origin, Point, Position, Side};

use super::transition::play_move;

/// Every legal action for the side on turn.
///
/// Never empty: a roll with no playable die yields the single empty action.
pub fn legal_actions(position: &Position, dice: &Dice) -> Vec<Action> {
    let lines = search(position, dice);
    let mut seen = FxHashSet::default();
    let actions: Vec<Action> = lines
        .into_iter()
        .filter(|line| seen.insert(line.action.clone()))
        .map(|line| line.action)
        .collect();

    log::trace!(
        "{} legal actions for {} with {}",
        actions.len(),
        position.turn(),
        dice
    );
    actions
}

/// One legal action per distinct resulting position, with that position.
///
/// Different move orders often reach the same board; value-based agents
/// only need to score each afterstate once. Afterstates have the turn
/// already passed to the opponent.
pub fn legal_afterstates(position: &Position, dice: &Dice) -> Vec<(Action, Position)> {
    let mut seen = FxHashSet::default();
    search(position, dice)
        .into_iter()
        .filter_map(|line| {
            let mut after = line.position;
            after.swap_turn();
            seen.insert(after).then_some((line.action, after))
        })
        .collect()
}

/// The move `die` makes from `origin`, if the rules allow it.
pub fn playable_move(position: &Position, side: Side, origin: Origin, die: u8) -> Option<Move> {
    let mv = Move::with_die(origin, die);
    match (origin, mv.destination) {
        (_, Destination::Point(to)) => (position.opponent_count_at_mirror(side, to) < 2).then_some(mv),
        (Origin::Point(from), Destination::Off) => {
            let state = position.side(side);
            let exact = from.index() + die as usize == Point::COUNT;
            (state.all_home() && (exact || !state.has_checker_behind(from))).then_some(mv)
        }
        (Origin::Bar, Destination::Off) => None,
    }
}

/// A complete line of play found by the search.
#[derive(Clone, Debug)]
struct Line {
    action: Action,
    /// Die value consumed by each move.
    used: SmallVec<[u8; 4]>,
    /// Board after the moves, turn not yet passed.
    position: Position,
}

struct Search {
    side: Side,
    found: Vec<Line>,
}

impl Search {
    fn explore(&mut self, line: Line, remaining: &[u8]) {
        if remaining.is_empty() {
            self.found.push(line);
            return;
        }

        let state = *line.position.side(self.side);
        let origins: SmallVec<[Origin; 15]> = if state.bar > 0 {
            SmallVec::from_slice(&[Origin::Bar])
        } else {
            Point::all()
                .filter(|&p| state.count(p) > 0)
                .map(Origin::Point)
                .collect()
        };

        for (i, &die) in remaining.iter().enumerate() {
            if remaining[..i].contains(&die) {
                continue;
            }
            let mut rest: SmallVec<[u8; 4]> = SmallVec::from_slice(remaining);
            rest.remove(i);

            for &origin in &origins {
                if let Some(mv) = playable_move(&line.position, self.side, origin, die) {
                    let mut next = line.clone();
                    play_move(&mut next.position, self.side, &mv);
                    next.action.push(mv);
                    next.used.push(die);
                    self.explore(next, &rest);
                }
            }
        }

        // the die cannot be used
        self.explore(line, &remaining[1..]);
    }
}

/// Run the search and apply the maximality and larger-die filters.
fn search(position: &Position, dice: &Dice) -> Vec<Line> {
    let mut search = Search {
        side: position.turn(),
        found: Vec::new(),
    };
    let root = Line {
        action: Action::pass(),
        used: SmallVec::new(),
        position: *position,
    };
    search.explore(root, dice.values());

    let max_len = search.found.iter().map(|l| l.action.len()).max().unwrap_or(0);
    let mut lines: Vec<Line> = search
        .found
        .into_iter()
        .filter(|l| l.action.len() == max_len)
        .collect();

    let values = dice.values();
    if max_len == 1 && values.len() == 2 && values[0] != values[1] {
        let larger = values[0].max(values[1]);
        if lines.iter().any(|l| l.used[0] == larger) {
            lines.retain(|l| l.used[0] == larger);
        }
    }

    if lines.is_empty() {
        lines.push(Line {
            action: Action::pass(),
            used: SmallVec::new(),
            position: *position,
        });
    }
    lines
}
