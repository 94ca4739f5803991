//! Single shop slot hit probability
//!
//! A slot first rolls a cost tier from the level odds, then picks one
//! physical copy uniformly from what is left of that tier's shared pool.

use serde::{Deserialize, Serialize};

use crate::tables::{Level, RollTables, Tier};

/// Copies already taken out of the shared pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollState {
    /// Copies of the wanted unit held by anyone
    pub owned_copies: u32,
    /// Copies of any unit with the same cost held by anyone
    pub owned_same_tier: u32,
}

impl RollState {
    pub fn new(owned_copies: u32, owned_same_tier: u32) -> Self {
        Self {
            owned_copies,
            owned_same_tier,
        }
    }

    /// State after `hits` more copies of the wanted unit leave the pool.
    ///
    /// Each hit is also a same-tier unit, so both counts move together.
    pub fn after_hits(self, hits: u32) -> Self {
        Self {
            owned_copies: self.owned_copies.saturating_add(hits),
            owned_same_tier: self.owned_same_tier.saturating_add(hits),
        }
    }
}

/// Probability that one shop slot shows the wanted unit.
///
/// Returns 0 once the tier pool is used up or the unit has no copies left.
pub fn hit_probability(tables: &RollTables, tier: Tier, level: Level, state: RollState) -> f64 {
    let tier_odds = tables.shop_odds(level, tier);
    if tier_odds == 0.0 {
        return 0.0;
    }

    let copies_left =
        (i64::from(tables.pool.copies_per_unit(tier)) - i64::from(state.owned_copies)).max(0);
    // Custom pools can hold more than i64::MAX copies
    let pool_left =
        i128::from(tables.pool.tier_pool_size(tier)) - i128::from(state.owned_same_tier);
    if pool_left <= 0 || copies_left == 0 {
        return 0.0;
    }

    (tier_odds * copies_left as f64 / pool_left as f64).clamp(0.0, 1.0)
}
