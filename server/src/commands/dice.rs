//! Dice Notation
//!
//! Parses `XdN` ("roll X dice with N faces each") and rolls the dice.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// A parsed dice expression. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    count: u32,
    faces: u32,
}

/// Error returned when a dice expression is not valid `XdN` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDiceSpec;

impl fmt::Display for InvalidDiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid dice notation")
    }
}

impl std::error::Error for InvalidDiceSpec {}

/// Strict base-10 parse: ASCII digits only, no sign, no fraction.
fn parse_positive(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|n| *n >= 1)
}

impl DiceSpec {
    /// Build a spec; `None` if either value is zero.
    pub const fn new(count: u32, faces: u32) -> Option<Self> {
        if count == 0 || faces == 0 {
            return None;
        }
        Some(Self { count, faces })
    }

    /// Parse `XdN`. Never panics; anything other than two positive integers
    /// separated by a single `d` is invalid.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.trim().split('d');
        let (Some(count), Some(faces), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };
        Self::new(parse_positive(count)?, parse_positive(faces)?)
    }

    /// Number of dice.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Faces per die.
    pub const fn faces(&self) -> u32 {
        self.faces
    }

    /// Roll every die with the thread-local generator.
    pub fn roll(&self) -> Vec<u32> {
        roll(self.count, self.faces)
    }
}

impl FromStr for DiceSpec {
    type Err = InvalidDiceSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(InvalidDiceSpec)
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

/// Roll `count` dice with `faces` faces using the thread-local generator.
pub fn roll(count: u32, faces: u32) -> Vec<u32> {
    roll_with(&mut rand::thread_rng(), count, faces)
}

/// Roll `count` dice with `faces` faces, each uniform over `1..=faces`.
///
/// Returns an empty list when `faces` is zero.
pub fn roll_with<R: Rng>(rng: &mut R, count: u32, faces: u32) -> Vec<u32> {
    if faces == 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.gen_range(1..=faces)).collect()
}
