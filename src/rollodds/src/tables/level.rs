//! Player level and shop odds per level

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tier::TIER_COUNT;
use crate::Error;

/// Number of player levels covered by the odds table
pub const LEVEL_COUNT: usize = 11;

/// Chance that a single shop slot rolls each cost tier, by player level.
///
/// Row `n` is level `n + 1`, columns are tiers 1..=5. Every row sums to 1.
pub const LEVEL_ODDS: [[f64; TIER_COUNT]; LEVEL_COUNT] = [
    [1.00, 0.00, 0.00, 0.00, 0.00], // 1
    [1.00, 0.00, 0.00, 0.00, 0.00], // 2
    [0.75, 0.25, 0.00, 0.00, 0.00], // 3
    [0.55, 0.30, 0.15, 0.00, 0.00], // 4
    [0.45, 0.33, 0.20, 0.02, 0.00], // 5
    [0.30, 0.40, 0.25, 0.05, 0.00], // 6
    [0.19, 0.30, 0.40, 0.10, 0.01], // 7
    [0.18, 0.25, 0.32, 0.22, 0.03], // 8
    [0.10, 0.20, 0.25, 0.35, 0.10], // 9
    [0.05, 0.10, 0.20, 0.40, 0.25], // 10
    [0.01, 0.02, 0.12, 0.50, 0.35], // 11
];

/// A validated player level (1..=11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = LEVEL_COUNT as u8;

    pub fn new(level: u8) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Row index into the odds table
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
