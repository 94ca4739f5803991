//! High-level odds engine
//!
//! Bundles a set of tables with search options and exposes the two main
//! questions: "what do I get for this much gold" and "how much gold for
//! this many copies".

use serde::{Deserialize, Serialize};

use crate::distribution::{shops_for_gold, Distribution};
use crate::markov::{TransitionMatrix, MAX_COPIES};
use crate::search::{gold_for_target, gold_table, GoldSearch, SearchOptions};
use crate::shop::{hit_probability, RollState};
use crate::tables::{Level, PoolVariant, RollTables, Tier};
use crate::Result;

/// What is being rolled for, and how much of the pool is already gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollQuery {
    pub tier: Tier,
    pub level: Level,
    #[serde(flatten)]
    pub state: RollState,
}

impl RollQuery {
    /// Build a query from raw numbers, rejecting unknown tiers and levels
    pub fn new(tier: u8, level: u8, owned_copies: u32, owned_same_tier: u32) -> Result<Self> {
        Ok(Self {
            tier: Tier::new(tier)?,
            level: Level::new(level)?,
            state: RollState::new(owned_copies, owned_same_tier),
        })
    }
}

/// Stateless calculator over one set of tables
#[derive(Debug, Clone, Default)]
pub struct OddsEngine {
    tables: RollTables,
    search: SearchOptions,
}

impl OddsEngine {
    pub fn new(tables: RollTables) -> Self {
        Self {
            tables,
            search: SearchOptions::default(),
        }
    }

    pub fn for_variant(variant: PoolVariant) -> Self {
        Self::new(RollTables::builtin(variant))
    }

    pub fn with_search_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    pub fn tables(&self) -> &RollTables {
        &self.tables
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search
    }

    /// Chance that a single shop slot shows the wanted unit
    pub fn hit_probability(&self, query: &RollQuery) -> f64 {
        hit_probability(&self.tables, query.tier, query.level, query.state)
    }

    pub fn transition_matrix(&self, query: &RollQuery) -> TransitionMatrix {
        TransitionMatrix::for_shop(&self.tables, query.tier, query.level, query.state)
    }

    /// Copy distribution after rolling `gold`
    pub fn distribution(&self, query: &RollQuery, gold: u32) -> Distribution {
        let shops = shops_for_gold(gold);
        let dist = Distribution::after_shops(&self.transition_matrix(query), shops);
        tracing::debug!(
            tier = %query.tier,
            level = %query.level,
            gold,
            shops,
            expected = dist.expected_value,
            "computed distribution"
        );
        dist
    }

    /// Smallest gold whose expected copies reach `target`
    pub fn gold_required(&self, target: f64, query: &RollQuery) -> Result<GoldSearch> {
        gold_for_target(&self.transition_matrix(query), target, self.search)
    }

    /// Gold required for an expected 1..=9 copies
    pub fn gold_table(&self, query: &RollQuery) -> Result<[GoldSearch; MAX_COPIES]> {
        gold_table(&self.transition_matrix(query), self.search)
    }
}

/// One-shot distribution with built-in tables for `set` (11 or 12)
pub fn compute_distribution(
    tier: u8,
    level: u8,
    owned_copies: u32,
    owned_same_tier: u32,
    gold: u32,
    set: u32,
) -> Result<Distribution> {
    let engine = OddsEngine::for_variant(PoolVariant::from_set(set)?);
    let query = RollQuery::new(tier, level, owned_copies, owned_same_tier)?;
    Ok(engine.distribution(&query, gold))
}

/// One-shot gold search with built-in tables for `set` (11 or 12)
pub fn gold_required_for_expected_value(
    target: f64,
    tier: u8,
    level: u8,
    owned_copies: u32,
    owned_same_tier: u32,
    set: u32,
) -> Result<GoldSearch> {
    let engine = OddsEngine::for_variant(PoolVariant::from_set(set)?);
    let query = RollQuery::new(tier, level, owned_copies, owned_same_tier)?;
    engine.gold_required(target, &query)
}
