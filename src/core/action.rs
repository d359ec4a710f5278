//! Move and action representation.
//!
//! A `Move` carries one checker from an `Origin` (a point or the bar) to a
//! `Destination` (a point or off the board). An `Action` is the ordered
//! sequence of moves played for one roll: one move per die consumed, so
//! zero to four moves. The empty action is a pass.
//!
//! Points are always expressed in the moving side's own frame.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Point;
use super::dice::Dice;
use super::side::Side;

/// Where a moved checker comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Bar,
    Point(Point),
}

/// Where a moved checker lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Point(Point),
    Off,
}

/// A single checker move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Origin,
    pub destination: Destination,
}

impl Move {
    #[must_use]
    pub const fn new(origin: Origin, destination: Destination) -> Self {
        Self { origin, destination }
    }

    /// The move a die of value `die` makes from `origin`.
    ///
    /// Bar entries land on point `die - 1`; anything past point 23 is a
    /// bear-off.
    #[must_use]
    pub fn with_die(origin: Origin, die: u8) -> Self {
        let target = match origin {
            Origin::Bar => die as usize - 1,
            Origin::Point(p) => p.index() + die as usize,
        };
        let destination = if target >= Point::COUNT {
            Destination::Off
        } else {
            Destination::Point(Point::new(target as u8))
        };
        Self { origin, destination }
    }

    /// Is this a bar entry?
    #[must_use]
    pub fn is_entry(&self) -> bool {
        matches!(self.origin, Origin::Bar)
    }

    /// Is this a bear-off?
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        matches!(self.destination, Destination::Off)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.origin {
            Origin::Bar => write!(f, "bar")?,
            Origin::Point(p) => write!(f, "{}", p.index())?,
        }
        match self.destination {
            Destination::Point(p) => write!(f, "/{}", p.index()),
            Destination::Off => write!(f, "/off"),
        }
    }
}

/// An ordered sequence of moves played for one roll.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Action, Destination, Move, Origin, Point};
///
/// let pass = Action::pass();
/// assert!(pass.is_pass());
///
/// let mut action = Action::pass();
/// action.push(Move::new(Origin::Bar, Destination::Point(Point::new(2))));
/// assert_eq!(action.len(), 1);
/// assert_eq!(action.to_string(), "bar/2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// SmallVec holds up to four moves (doubles) without heap allocation.
    pub moves: SmallVec<[Move; 4]>,
}

impl Action {
    /// The empty action.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            moves: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn from_moves(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Number of dice this action consumes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.moves.is_empty() {
            return write!(f, "pass");
        }
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// A committed step recorded by a game session.
///
/// Used for replay and debugging, and as raw material for training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that moved.
    pub side: Side,

    /// The roll the action was chosen for.
    pub dice: Dice,

    /// The action taken.
    pub action: Action,

    /// Ply number (0-based) within the game.
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, dice: Dice, action: Action, ply: u32) -> Self {
        Self {
            side,
            dice,
            action,
            ply,
        }
    }
}
