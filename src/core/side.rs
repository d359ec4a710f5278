//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Backgammon has exactly two sides. `Side::opponent()` is the only way the
//! engine flips between them.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`. Backed by `[T; 2]`, so it is
//! `Copy` whenever `T` is and cloning never allocates.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// White is the fixed reference side for signed rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Slot index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// +1 for White, -1 for Black.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Side, SideMap};
///
/// let mut off: SideMap<u8> = SideMap::with_value(0);
/// off[Side::Black] = 3;
///
/// assert_eq!(off[Side::White], 0);
/// assert_eq!(off[Side::Black], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from explicit White and Black values.
    pub fn from_pair(white: T, black: T) -> Self {
        Self { data: [white, black] }
    }

    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Black)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Mutable access to both entries at once, mover first.
    pub fn pair_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [white, black] = &mut self.data;
        match side {
            Side::White => (white, black),
            Side::Black => (black, white),
        }
    }

    /// Iterate over (Side, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, White first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::ALL {
            assert_ne!(side, side.opponent());
            assert_eq!(side, side.opponent().opponent());
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::White), "White");
        assert_eq!(format!("{}", Side::Black), "Black");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::White], 0);
        assert_eq!(map[Side::Black], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);
        map[Side::White] = 7;
        *map.get_mut(Side::Black) += 2;

        assert_eq!(map[Side::White], 7);
        assert_eq!(map[Side::Black], 2);
    }

    #[test]
    fn test_pair_mut_orders_mover_first() {
        let mut map = SideMap::from_pair(1, 2);
        let (mover, other) = map.pair_mut(Side::Black);
        assert_eq!((*mover, *other), (2, 1));
        *mover = 20;
        *other = 10;
        assert_eq!(map, SideMap::from_pair(10, 20));
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::from_pair('w', 'b');
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::White, &'w'), (Side::Black, &'b')]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::from_pair(3u8, 4u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
