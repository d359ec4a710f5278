//! Terminal detection and scoring.
//!
//! The game ends the moment a side has borne off all 15 checkers. It is a
//! gammon (worth 2) when the loser has not borne off a single checker,
//! otherwise a single game (worth 1).

use serde::{Deserialize, Serialize};

use crate::core::{Position, Side, CHECKERS_PER_SIDE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    Single,
    Gammon,
}

impl WinKind {
    #[must_use]
    pub const fn magnitude(self) -> u8 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub kind: WinKind,
}

impl Outcome {
    #[must_use]
    pub const fn magnitude(&self) -> u8 {
        self.kind.magnitude()
    }

    /// Signed reward from White's perspective: positive when White wins.
    #[must_use]
    pub const fn reward(&self) -> i8 {
        self.winner.sign() * self.kind.magnitude() as i8
    }

    /// Signed reward from `side`'s perspective.
    #[must_use]
    pub const fn reward_for(&self, side: Side) -> i8 {
        self.reward() * side.sign()
    }

    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            WinKind::Single => write!(f, "{} wins", self.winner),
            WinKind::Gammon => write!(f, "{} wins a gammon", self.winner),
        }
    }
}

/// `Some` once a side has borne off every checker.
#[must_use]
pub fn outcome(position: &Position) -> Option<Outcome> {
    Side::ALL
        .into_iter()
        .find(|&side| position.side(side).borne_off == CHECKERS_PER_SIDE)
        .map(|winner| {
            let kind = if position.side(winner.opponent()).borne_off == 0 {
                WinKind::Gammon
            } else {
                WinKind::Single
            };
            Outcome { winner, kind }
        })
}

/// Signed reward from White's perspective, 0 while the game continues.
#[must_use]
pub fn reward(position: &Position) -> i8 {
    outcome(position).map_or(0, |o| o.reward())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{starting_position, SideState};

    fn finished(winner: Side, loser_off: u8) -> Position {
        let won = SideState {
            borne_off: 15,
            ..SideState::default()
        };
        let mut lost = SideState {
            borne_off: loser_off,
            on_turn: true,
            ..SideState::default()
        };
        lost.points[10] = 15 - loser_off;
        match winner {
            Side::White => Position::from_sides(won, lost).unwrap(),
            Side::Black => Position::from_sides(lost, won).unwrap(),
        }
    }

    #[test]
    fn test_non_terminal() {
        assert_eq!(outcome(&starting_position()), None);
        assert_eq!(reward(&starting_position()), 0);
    }

    #[test]
    fn test_white_gammon() {
        let o = outcome(&finished(Side::White, 0)).unwrap();
        assert_eq!(o, Outcome { winner: Side::White, kind: WinKind::Gammon });
        assert_eq!(o.magnitude(), 2);
        assert_eq!(o.reward(), 2);
        assert_eq!(o.reward_for(Side::Black), -2);
    }

    #[test]
    fn test_black_single() {
        let position = finished(Side::Black, 4);
        let o = outcome(&position).unwrap();
        assert_eq!(o.kind, WinKind::Single);
        assert!(o.is_winner(Side::Black));
        assert_eq!(reward(&position), -1);
        assert_eq!(o.reward_for(Side::Black), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(outcome(&finished(Side::White, 0)).unwrap().to_string(), "White wins a gammon");
        assert_eq!(outcome(&finished(Side::Black, 1)).unwrap().to_string(), "Black wins");
    }
}
