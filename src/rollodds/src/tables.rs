//! Lookup tables consumed by the odds engine
//!
//! Shop odds per level and the shared pool size per cost tier. The built-in
//! tables are constants; custom tables can be loaded from JSON or YAML and
//! are validated before use.

mod level;
mod pool;
mod tier;

pub use level::{Level, LEVEL_COUNT, LEVEL_ODDS};
pub use pool::{PoolTable, PoolVariant, SET11_POOL, SET12_POOL};
pub use tier::{Tier, TIER_COUNT, TIER_NAMES};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Allowed drift from 1.0 when summing an odds row
const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Odds and pool data for one game set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollTables {
    /// Chance of each tier per shop slot, indexed by level then tier
    pub level_odds: [[f64; TIER_COUNT]; LEVEL_COUNT],
    pub pool: PoolTable,
}

impl RollTables {
    /// Built-in tables for a known set
    pub fn builtin(variant: PoolVariant) -> Self {
        Self {
            level_odds: LEVEL_ODDS,
            pool: *variant.pool(),
        }
    }

    /// Parse and validate tables from JSON
    pub fn from_json(data: &str) -> Result<Self> {
        let tables: RollTables = serde_json::from_str(data)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate tables from YAML
    pub fn from_yaml(data: &str) -> Result<Self> {
        let tables: RollTables = serde_yaml::from_str(data)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every odds row is a probability distribution and no tier
    /// has an empty pool
    pub fn validate(&self) -> Result<()> {
        for (row_idx, row) in self.level_odds.iter().enumerate() {
            for (tier_idx, &value) in row.iter().enumerate() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(Error::InvalidOdds {
                        level: row_idx + 1,
                        tier: tier_idx + 1,
                        value,
                    });
                }
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(Error::InvalidOddsRow {
                    level: row_idx + 1,
                    sum,
                });
            }
        }
        self.pool.validate()
    }

    /// Chance that one shop slot offers a unit of `tier` at `level`
    pub fn shop_odds(&self, level: Level, tier: Tier) -> f64 {
        self.level_odds[level.index()][tier.index()]
    }
}

impl Default for RollTables {
    fn default() -> Self {
        Self::builtin(PoolVariant::default())
    }
}
