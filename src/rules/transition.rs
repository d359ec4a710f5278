//! Transition engine: apply an action to a position.
//!
//! Each move lifts a checker (from the bar or a point) and places it (on a
//! point or off the board). Landing on a lone opposing checker sends it to
//! the opponent's bar. After the last move the turn passes to the opponent,
//! including for the empty action.
//!
//! `apply` validates every move against the position it is played on and
//! checks the 15-checker invariant afterwards, so a bad action is reported
//! and never produces a corrupt position.

use crate::core::{
    Action, Destination, EngineError, InvalidMove, Move, Origin, Point, Position, Result, Side,
};

/// Apply `action` for the side on turn and return the successor position.
///
/// Moves are checked against the board only, never against a roll. An
/// overshooting bear-off is accepted from any home point, even with a
/// checker farther back, and the action need not be maximal. Use
/// [`legal_actions`](crate::rules::legal_actions) or `Game::step` with
/// legality verification for roll-aware checks.
pub fn apply(position: &Position, action: &Action) -> Result<Position> {
    let side = position.turn();
    let mut next = *position;

    for mv in action.iter() {
        validate_move(&next, side, mv).map_err(|reason| EngineError::InvalidAction { mv: *mv, reason })?;
        play_move(&mut next, side, mv);
    }

    next.swap_turn();
    next.check_invariants()?;
    Ok(next)
}

/// The afterstate of `action`, without committing to it.
///
/// Identical to [`apply`]: the input is borrowed and never modified, so
/// value-based agents can score any number of hypothetical successors.
pub fn simulate(position: &Position, action: &Action) -> Result<Position> {
    apply(position, action)
}

/// Check one move against the board it would be played on.
pub fn validate_move(position: &Position, side: Side, mv: &Move) -> std::result::Result<(), InvalidMove> {
    let state = position.side(side);

    match mv.origin {
        Origin::Bar if state.bar == 0 => return Err(InvalidMove::EmptyBar),
        Origin::Bar => {}
        Origin::Point(_) if state.bar > 0 => return Err(InvalidMove::BarNotEmpty),
        Origin::Point(p) if state.count(p) == 0 => return Err(InvalidMove::EmptyOrigin),
        Origin::Point(_) => {}
    }

    match (mv.origin, mv.destination) {
        (Origin::Bar, Destination::Point(to)) if to.index() >= 6 => Err(InvalidMove::TooFar),
        (Origin::Point(from), Destination::Point(to)) if to <= from => Err(InvalidMove::Backwards),
        (Origin::Point(from), Destination::Point(to)) if to.index() - from.index() > 6 => {
            Err(InvalidMove::TooFar)
        }
        (_, Destination::Point(to)) => match position.opponent_count_at_mirror(side, to) {
            n if n >= 2 => Err(InvalidMove::Blocked(n)),
            _ => Ok(()),
        },
        (_, Destination::Off) if !state.all_home() => Err(InvalidMove::NotAllHome),
        (Origin::Point(from), Destination::Off) if Point::COUNT - from.index() > 6 => Err(InvalidMove::TooFar),
        (_, Destination::Off) => Ok(()),
    }
}

/// Lift and place one checker, capturing a blot on the destination.
///
/// Performs no validation; callers either validated the move or generated it
/// from the legality search.
pub(crate) fn play_move(position: &mut Position, side: Side, mv: &Move) {
    let (mover, opponent) = position.sides_mut().pair_mut(side);

    match mv.origin {
        Origin::Bar => mover.bar -= 1,
        Origin::Point(p) => mover.points[p.index()] -= 1,
    }

    match mv.destination {
        Destination::Off => mover.borne_off += 1,
        Destination::Point(p) => {
            let mirror = p.mirror().index();
            if opponent.points[mirror] == 1 {
                opponent.points[mirror] = 0;
                opponent.bar += 1;
            }
            mover.points[p.index()] += 1;
        }
    }
}
