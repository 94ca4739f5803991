//! Shared unit pool sizes per game set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tier::{Tier, TIER_COUNT};
use crate::Error;

/// Physical copies per unit and distinct units, by cost tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTable {
    /// Copies of each individual unit in the shared pool
    pub total_units: [u32; TIER_COUNT],
    /// Number of different units at each cost
    pub distinct_items: [u32; TIER_COUNT],
}

/// Set 11 pool, kept for comparison
pub const SET11_POOL: PoolTable = PoolTable {
    total_units: [22, 20, 17, 10, 9],
    distinct_items: [13, 13, 13, 12, 8],
};

pub const SET12_POOL: PoolTable = PoolTable {
    total_units: [30, 25, 18, 10, 9],
    distinct_items: [14, 13, 13, 12, 8],
};

impl PoolTable {
    /// Copies of a single unit of this tier
    pub fn copies_per_unit(&self, tier: Tier) -> u32 {
        self.total_units[tier.index()]
    }

    /// Different units sharing this tier
    pub fn distinct_units(&self, tier: Tier) -> u32 {
        self.distinct_items[tier.index()]
    }

    /// Every physical copy of every unit of this tier
    pub fn tier_pool_size(&self, tier: Tier) -> u64 {
        u64::from(self.copies_per_unit(tier)) * u64::from(self.distinct_units(tier))
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for tier in 0..TIER_COUNT {
            if self.total_units[tier] == 0 {
                return Err(Error::EmptyPool {
                    tier: tier + 1,
                    field: "total_units",
                });
            }
            if self.distinct_items[tier] == 0 {
                return Err(Error::EmptyPool {
                    tier: tier + 1,
                    field: "distinct_items",
                });
            }
        }
        Ok(())
    }
}

/// Built-in dataset selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolVariant {
    Set11,
    #[default]
    Set12,
}

impl PoolVariant {
    pub const ALL: [PoolVariant; 2] = [PoolVariant::Set11, PoolVariant::Set12];

    /// Look up a variant by its set number
    pub fn from_set(set: u32) -> Result<Self, Error> {
        match set {
            11 => Ok(PoolVariant::Set11),
            12 => Ok(PoolVariant::Set12),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }

    pub fn set_number(self) -> u32 {
        match self {
            PoolVariant::Set11 => 11,
            PoolVariant::Set12 => 12,
        }
    }

    pub fn pool(self) -> &'static PoolTable {
        match self {
            PoolVariant::Set11 => &SET11_POOL,
            PoolVariant::Set12 => &SET12_POOL,
        }
    }
}

impl FromStr for PoolVariant {
    type Err = Error;

    /// Accepts `11`, `set11`, `Set 11` and the like
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let digits = normalized.strip_prefix("set").unwrap_or(&normalized);
        digits
            .parse::<u32>()
            .map_err(|_| Error::UnknownVariant(s.to_string()))
            .and_then(PoolVariant::from_set)
    }
}

impl fmt::Display for PoolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {}", self.set_number())
    }
}
