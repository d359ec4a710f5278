//! Dice rolls and the doubles rule.
//!
//! A roll of two distinct values yields exactly those two dice. A roll of
//! two equal values yields four uses of that value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::rng::GameRng;

/// The dice available for one turn, in search order.
///
/// Deserialization goes through [`Dice::new`], so stored rolls are
/// validated like any other input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDice")]
pub struct Dice {
    values: SmallVec<[u8; 4]>,
}

#[derive(Deserialize)]
struct RawDice {
    values: Vec<u8>,
}

impl TryFrom<RawDice> for Dice {
    type Error = EngineError;

    fn try_from(raw: RawDice) -> Result<Self> {
        Self::new(&raw.values)
    }
}

impl Dice {
    /// Roll two dice, expanding doubles.
    pub fn roll(rng: &mut GameRng) -> Self {
        let first = rng.roll_die();
        let second = rng.roll_die();
        Self::from_pair(first, second)
    }

    /// Build the dice for a two-die roll, expanding doubles.
    ///
    /// # Panics
    ///
    /// Panics if either value is outside 1..=6.
    #[must_use]
    pub fn from_pair(first: u8, second: u8) -> Self {
        assert!((1..=6).contains(&first) && (1..=6).contains(&second), "die values must be in 1..=6");
        let values = if first == second {
            SmallVec::from_slice(&[first; 4])
        } else {
            SmallVec::from_slice(&[first, second])
        };
        Self { values }
    }

    /// Build an explicit dice sequence, as left over mid-turn.
    ///
    /// Accepts 1 to 4 values, each in 1..=6.
    pub fn new(values: &[u8]) -> Result<Self> {
        if values.is_empty() || values.len() > 4 || values.iter().any(|v| !(1..=6).contains(v)) {
            return Err(EngineError::InvalidDice(values.to_vec()));
        }
        Ok(Self {
            values: SmallVec::from_slice(values),
        })
    }

    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed roll; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Four equal dice.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.values.len() == 4 && self.values.iter().all(|&v| v == self.values[0])
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_pair() {
        let dice = Dice::from_pair(3, 5);
        assert_eq!(dice.values(), &[3, 5]);
        assert!(!dice.is_double());
    }

    #[test]
    fn test_doubles_expand_to_four() {
        let dice = Dice::from_pair(4, 4);
        assert_eq!(dice.values(), &[4, 4, 4, 4]);
        assert!(dice.is_double());
    }

    #[test]
    fn test_roll_is_always_two_or_four() {
        let mut rng = GameRng::new(99);
        let mut saw_double = false;

        for _ in 0..500 {
            let dice = Dice::roll(&mut rng);
            assert!(dice.len() == 2 || dice.len() == 4);
            assert!(dice.values().iter().all(|v| (1..=6).contains(v)));
            if dice.len() == 4 {
                assert!(dice.is_double());
                saw_double = true;
            } else {
                assert_ne!(dice.values()[0], dice.values()[1]);
            }
        }

        assert!(saw_double);
    }

    #[test]
    fn test_roll_is_seeded() {
        let mut rng1 = GameRng::new(5);
        let mut rng2 = GameRng::new(5);
        for _ in 0..20 {
            assert_eq!(Dice::roll(&mut rng1), Dice::roll(&mut rng2));
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(Dice::new(&[6]).is_ok());
        assert!(Dice::new(&[2, 2, 2]).is_ok());
        assert_eq!(Dice::new(&[]), Err(EngineError::InvalidDice(vec![])));
        assert_eq!(Dice::new(&[0, 3]), Err(EngineError::InvalidDice(vec![0, 3])));
        assert_eq!(Dice::new(&[1, 7]), Err(EngineError::InvalidDice(vec![1, 7])));
        assert!(Dice::new(&[1, 1, 1, 1, 1]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::from_pair(6, 1).to_string(), "[6,1]");
    }

    #[test]
    fn test_serde_round_trip() {
        let dice = Dice::from_pair(5, 5);
        let json = serde_json::to_string(&dice).unwrap();
        assert_eq!(json, r#"{"values":[5,5,5,5]}"#);
        assert_eq!(serde_json::from_str::<Dice>(&json).unwrap(), dice);
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        for json in [
            r#"{"values":[0]}"#,
            r#"{"values":[9]}"#,
            r#"{"values":[3,7]}"#,
            r#"{"values":[]}"#,
            r#"{"values":[1,1,1,1,1]}"#,
        ] {
            assert!(serde_json::from_str::<Dice>(json).is_err(), "{json}");
        }
        assert_eq!(serde_json::from_str::<Dice>(r#"{"values":[2]}"#).unwrap(), Dice::new(&[2]).unwrap());
    }
}
