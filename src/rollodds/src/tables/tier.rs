//! Cost tier definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Number of cost tiers in every table
pub const TIER_COUNT: usize = 5;

/// Display names for each cost tier, cheapest first
pub const TIER_NAMES: [&str; TIER_COUNT] = ["Common", "Uncommon", "Rare", "Epic", "Legendary"];

/// A validated unit cost tier (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = TIER_COUNT as u8;

    pub fn new(tier: u8) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&tier) {
            Ok(Self(tier))
        } else {
            Err(Error::InvalidTier(tier))
        }
    }

    /// The 1-based tier number (also the unit's gold cost)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Column index into per-tier tables
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn name(self) -> &'static str {
        TIER_NAMES[self.index()]
    }

    /// Every tier, cheapest first
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN..=Self::MAX).map(Tier)
    }
}

impl TryFrom<u8> for Tier {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bounds() {
        assert!(Tier::new(0).is_err());
        assert!(Tier::new(6).is_err());
        assert_eq!(Tier::new(1).unwrap().index(), 0);
        assert_eq!(Tier::new(5).unwrap().index(), 4);
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::new(1).unwrap().name(), "Common");
        assert_eq!(Tier::new(5).unwrap().name(), "Legendary");
        assert_eq!(Tier::all().count(), TIER_COUNT);
    }

    #[test]
    fn test_tier_serde_rejects_out_of_range() {
        let tier: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(tier.get(), 3);
        assert!(serde_json::from_str::<Tier>("9").is_err());
    }
}
