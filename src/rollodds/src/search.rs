//! Gold needed to reach a target expected value
//!
//! Expected copies only change once per reroll (every 2 gold), so the search
//! walks rerolls: one state vector pushed forward by the five-shop matrix
//! instead of re-powering the matrix for every gold value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::distribution::{expected_value, GOLD_PER_REROLL, SHOPS_PER_REROLL};
use crate::markov::{start_state, TransitionMatrix, MAX_COPIES};
use crate::{Error, Result};

/// Highest gold budget the search will consider
pub const DEFAULT_GOLD_LIMIT: u32 = 200;

/// Message shown when no budget within the limit is enough
pub const LIMIT_REACHED_MESSAGE: &str = "Gold limit reached";

/// Search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Largest gold value tried (inclusive)
    pub gold_limit: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            gold_limit: DEFAULT_GOLD_LIMIT,
        }
    }
}

/// Result of a gold search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldSearch {
    /// Smallest gold budget meeting the target
    Found(u32),
    /// The target is out of reach within the gold limit
    LimitReached,
}

impl GoldSearch {
    pub fn gold(self) -> Option<u32> {
        match self {
            GoldSearch::Found(gold) => Some(gold),
            GoldSearch::LimitReached => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, GoldSearch::Found(_))
    }
}

impl fmt::Display for GoldSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoldSearch::Found(gold) => write!(f, "{}", gold),
            GoldSearch::LimitReached => f.write_str(LIMIT_REACHED_MESSAGE),
        }
    }
}

/// Smallest gold budget whose expected copies reach `target`
pub fn gold_for_target(
    shop: &TransitionMatrix,
    target: f64,
    options: SearchOptions,
) -> Result<GoldSearch> {
    let results = gold_for_targets(shop, &[target], options)?;
    Ok(results[0])
}

/// Answer several targets in one walk over the gold budget.
///
/// Results come back in the same order as `targets`.
pub fn gold_for_targets(
    shop: &TransitionMatrix,
    targets: &[f64],
    options: SearchOptions,
) -> Result<Vec<GoldSearch>> {
    if let Some(&bad) = targets.iter().find(|t| !t.is_finite()) {
        return Err(Error::InvalidTarget(bad));
    }

    let mut results = vec![GoldSearch::LimitReached; targets.len()];
    let mut pending: Vec<usize> = (0..targets.len()).collect();

    let reroll = shop.pow(SHOPS_PER_REROLL);
    let mut state = start_state();
    let mut gold = 0u32;

    loop {
        let ev = expected_value(&state);
        pending.retain(|&idx| {
            if ev >= targets[idx] {
                results[idx] = GoldSearch::Found(gold);
                false
            } else {
                true
            }
        });

        if pending.is_empty() {
            break;
        }
        match gold.checked_add(GOLD_PER_REROLL) {
            Some(next) if next <= options.gold_limit => gold = next,
            _ => break,
        }
        state = reroll.advance(&state);
    }

    tracing::debug!(
        targets = targets.len(),
        unreached = pending.len(),
        last_gold = gold,
        "gold search finished"
    );
    Ok(results)
}

/// Gold needed for an expected 1, 2, ..., 9 copies
pub fn gold_table(
    shop: &TransitionMatrix,
    options: SearchOptions,
) -> Result<[GoldSearch; MAX_COPIES]> {
    let targets: Vec<f64> = (1..=MAX_COPIES).map(|k| k as f64).collect();
    let found = gold_for_targets(shop, &targets, options)?;

    let mut table = [GoldSearch::LimitReached; MAX_COPIES];
    table.copy_from_slice(&found);
    Ok(table)
}
