//! Board model: points, per-side checker counts, and positions.
//!
//! ## Reference frames
//!
//! Each side counts points 0..=23 from its own starting edge toward its own
//! bear-off edge, so both sides move "upwards" in their own frame. Point `p`
//! in one frame is point `23 - p` in the other (`Point::mirror`). The home
//! board is points 18..=23.
//!
//! ## Value semantics
//!
//! A `Position` is two fixed-size `SideState`s. Cloning is a plain copy, so
//! the legality search hands every branch its own snapshot and no branch can
//! corrupt a sibling or the caller's position.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::side::{Side, SideMap};

/// Checkers each side owns.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// A point index in one side's own frame (0..=23).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Point(u8);

impl TryFrom<u8> for Point {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self> {
        Self::try_new(usize::from(index))
            .ok_or_else(|| EngineError::InvalidBoard(format!("point {index} out of range")))
    }
}

impl Point {
    /// Points on the board.
    pub const COUNT: usize = 24;

    /// First point of the home board.
    pub const HOME_START: usize = 18;

    /// # Panics
    ///
    /// Panics if `index > 23`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT, "point index out of range");
        Self(index)
    }

    /// Checked constructor for indices from outside the engine.
    #[must_use]
    pub fn try_new(index: usize) -> Option<Self> {
        (index < Self::COUNT).then(|| Self(index as u8))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The same physical point in the opponent's frame.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self(23 - self.0)
    }

    /// Is this point inside the home board?
    #[must_use]
    pub const fn is_home(self) -> bool {
        self.index() >= Self::HOME_START
    }

    /// Iterate over every point, 0 first.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..Self::COUNT as u8).map(Point)
    }
}

/// One side's checkers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideState {
    /// Checkers resting on each point, in this side's frame.
    pub points: [u8; Point::COUNT],
    /// Checkers waiting to re-enter.
    pub bar: u8,
    /// Checkers permanently removed.
    pub borne_off: u8,
    pub on_turn: bool,
}

impl SideState {
    /// The opening layout: 2 on point 0, 5 on 11, 3 on 16, 5 on 18.
    #[must_use]
    pub fn starting(on_turn: bool) -> Self {
        let mut points = [0; Point::COUNT];
        points[0] = 2;
        points[11] = 5;
        points[16] = 3;
        points[18] = 5;
        Self {
            points,
            bar: 0,
            borne_off: 0,
            on_turn,
        }
    }

    /// Checkers on the board, the bar and off, which must equal 15.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.iter().map(|&n| u32::from(n)).sum::<u32>()
            + u32::from(self.bar)
            + u32::from(self.borne_off)
    }

    #[must_use]
    pub fn count(&self, point: Point) -> u8 {
        self.points[point.index()]
    }

    /// True when every checker still in play sits in the home board.
    #[must_use]
    pub fn all_home(&self) -> bool {
        self.bar == 0 && Point::all().filter(|p| !p.is_home()).all(|p| self.count(p) == 0)
    }

    /// Any checker on a point farther from home than `point`?
    #[must_use]
    pub fn has_checker_behind(&self, point: Point) -> bool {
        self.points[..point.index()].iter().any(|&n| n > 0)
    }

    /// Pips needed to bear every checker off. Bar checkers count 25.
    #[must_use]
    pub fn pip_count(&self) -> u32 {
        let board: u32 = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &n)| (Point::COUNT - i) as u32 * u32::from(n))
            .sum();
        board + 25 * u32::from(self.bar)
    }
}

/// A full board position: both sides plus whose turn it is.
///
/// Deserialization goes through [`Position::from_sides`], so a stored
/// position that breaks the board invariants is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    sides: SideMap<SideState>,
}

#[derive(Deserialize)]
struct RawPosition {
    sides: SideMap<SideState>,
}

impl TryFrom<RawPosition> for Position {
    type Error = EngineError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Self::from_sides(raw.sides[Side::White], raw.sides[Side::Black])
    }
}

/// The standard opening position with White on turn.
#[must_use]
pub fn starting_position() -> Position {
    Position::starting(Side::White)
}

impl Position {
    /// The standard opening position with `first` on turn.
    #[must_use]
    pub fn starting(first: Side) -> Self {
        Self {
            sides: SideMap::new(|s| SideState::starting(s == first)),
        }
    }

    /// Build a position from explicit side states, validating it.
    ///
    /// Rejects counts that break the 15-checker invariant, points occupied by
    /// both sides, and anything other than exactly one side on turn.
    pub fn from_sides(white: SideState, black: SideState) -> Result<Self> {
        let position = Self {
            sides: SideMap::from_pair(white, black),
        };
        position.check_invariants()?;
        for point in Point::all() {
            if white.count(point) > 0 && black.count(point.mirror()) > 0 {
                return Err(EngineError::InvalidBoard(format!(
                    "point {} (White frame) holds checkers of both sides",
                    point.index()
                )));
            }
        }
        Ok(position)
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        if self.sides[Side::White].on_turn {
            Side::White
        } else {
            Side::Black
        }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    pub(crate) fn sides_mut(&mut self) -> &mut SideMap<SideState> {
        &mut self.sides
    }

    /// `side`'s checkers on `point` (in `side`'s frame).
    #[must_use]
    pub fn checkers_on_point(&self, side: Side, point: Point) -> u8 {
        self.sides[side].count(point)
    }

    /// Opposing checkers on the physical point `side` calls `point`.
    #[must_use]
    pub fn opponent_count_at_mirror(&self, side: Side, point: Point) -> u8 {
        self.sides[side.opponent()].count(point.mirror())
    }

    #[must_use]
    pub fn pip_count(&self, side: Side) -> u32 {
        self.sides[side].pip_count()
    }

    #[must_use]
    pub fn all_home(&self, side: Side) -> bool {
        self.sides[side].all_home()
    }

    /// Hand the turn to the other side.
    pub(crate) fn swap_turn(&mut self) {
        for (_, state) in self.sides.iter_mut() {
            state.on_turn = !state.on_turn;
        }
    }

    /// Check the checker-count invariant for both sides and that exactly one
    /// side is on turn.
    pub fn check_invariants(&self) -> Result<()> {
        for (side, state) in self.sides.iter() {
            let total = state.total();
            if total != u32::from(CHECKERS_PER_SIDE) {
                return Err(EngineError::InvariantViolation {
                    side,
                    detail: format!(
                        "{total} checkers (bar {}, off {}, board {})",
                        state.bar,
                        state.borne_off,
                        total - u32::from(state.bar) - u32::from(state.borne_off)
                    ),
                });
            }
        }
        if self.sides[Side::White].on_turn == self.sides[Side::Black].on_turn {
            return Err(EngineError::InvariantViolation {
                side: Side::White,
                detail: "exactly one side must be on turn".to_string(),
            });
        }
        Ok(())
    }

    /// The point-indexed view of this position from `perspective`'s frame.
    #[must_use]
    pub fn to_signed(&self, perspective: Side) -> SignedBoard {
        let own = &self.sides[perspective];
        let other = &self.sides[perspective.opponent()];
        let mut points = [0i8; Point::COUNT];
        for point in Point::all() {
            points[point.index()] = own.count(point) as i8 - other.count(point.mirror()) as i8;
        }
        SignedBoard {
            perspective,
            points,
            bar: SideMap::new(|s| self.sides[s].bar),
            borne_off: SideMap::new(|s| self.sides[s].borne_off),
            turn: self.turn(),
        }
    }

    /// Rebuild a position from its point-indexed view, validating it.
    pub fn from_signed(board: &SignedBoard) -> Result<Self> {
        let perspective = board.perspective;
        let mut sides = SideMap::new(|s| SideState {
            points: [0; Point::COUNT],
            bar: board.bar[s],
            borne_off: board.borne_off[s],
            on_turn: s == board.turn,
        });
        for point in Point::all() {
            let value = board.points[point.index()];
            if value > 0 {
                sides[perspective].points[point.index()] = value as u8;
            } else if value < 0 {
                sides[perspective.opponent()].points[point.mirror().index()] = value.unsigned_abs();
            }
        }
        Self::from_sides(sides[Side::White], sides[Side::Black])
    }
}

impl Default for Position {
    fn default() -> Self {
        starting_position()
    }
}

/// Human-readable, point-indexed form of a position.
///
/// `points[i]` is the number of checkers on point `i` of `perspective`'s
/// frame: positive for `perspective`, negative for its opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBoard {
    pub perspective: Side,
    pub points: [i8; Point::COUNT],
    pub bar: SideMap<u8>,
    pub borne_off: SideMap<u8>,
    pub turn: Side,
}

impl std::fmt::Display for Position {
    /// Renders the board in White's frame: `W` counts White checkers, `B`
    /// counts Black checkers on the same physical point.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let signed = self.to_signed(Side::White);
        write!(f, "pt ")?;
        for point in Point::all() {
            write!(f, "{:>3}", point.index())?;
        }
        writeln!(f)?;
        write!(f, "   ")?;
        for value in signed.points {
            match value {
                0 => write!(f, "  .")?,
                v if v > 0 => write!(f, "{:>2}W", v)?,
                v => write!(f, "{:>2}B", -v)?,
            }
        }
        writeln!(f)?;
        for side in Side::ALL {
            let marker = if side == self.turn() { " *" } else { "" };
            writeln!(
                f,
                "{side}: bar {} off {} pips {}{marker}",
                signed.bar[side],
                signed.borne_off[side],
                self.pip_count(side)
            )?;
        }
        Ok(())
    }
}
