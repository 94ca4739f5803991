//! # rollodds
//!
//! Shop-roll odds for auto-battler shops.
//!
//! Given the cost tier of the unit you want, your level, how many copies of
//! it (and of other units with the same cost) are already out of the shared
//! pool, and how much gold you are willing to roll, this library computes:
//! - the chance of ending up with exactly 0..=9 copies (9 meaning "9 or more")
//! - the chance of getting at least k copies
//! - the expected number of copies
//! - the gold needed to expect a given number of copies
//!
//! Each shop refresh is one step of a Markov chain over "copies hit so far";
//! 2 gold buys one reroll of 5 shop slots.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), rollodds::Error> {
//! let dist = rollodds::compute_distribution(4, 8, 1, 12, 50, 12)?;
//! println!("At least one copy: {:.2}", dist.at_least(1));
//! println!("Expected copies: {:.2}", dist.expected_value);
//!
//! let gold = rollodds::gold_required_for_expected_value(2.0, 4, 8, 1, 12, 12)?;
//! println!("Gold for two copies: {}", gold);
//! # Ok(())
//! # }
//! ```

pub mod distribution;
pub mod engine;
pub mod markov;
pub mod search;
pub mod shop;
pub mod tables;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use distribution::{shops_for_gold, Distribution, GOLD_PER_REROLL, SHOPS_PER_REROLL};
#[doc(inline)]
pub use engine::{compute_distribution, gold_required_for_expected_value, OddsEngine, RollQuery};
#[doc(inline)]
pub use markov::{TransitionMatrix, MAX_COPIES, STATE_COUNT};
#[doc(inline)]
pub use search::{GoldSearch, SearchOptions, DEFAULT_GOLD_LIMIT};
#[doc(inline)]
pub use shop::{hit_probability, RollState};
#[doc(inline)]
pub use tables::{Level, PoolTable, PoolVariant, RollTables, Tier, LEVEL_ODDS};

/// Errors from odds calculations and table loading
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid tier {0}: expected 1..=5")]
    InvalidTier(u8),

    #[error("Invalid level {0}: expected 1..=11")]
    InvalidLevel(u8),

    #[error("Unknown set: {0} (supported: 11, 12)")]
    UnknownVariant(String),

    #[error("Invalid target expected value: {0}")]
    InvalidTarget(f64),

    #[error("Level {level} odds sum to {sum}, expected 1")]
    InvalidOddsRow { level: usize, sum: f64 },

    #[error("Level {level} tier {tier} odds {value} outside [0, 1]")]
    InvalidOdds { level: usize, tier: usize, value: f64 },

    #[error("Tier {tier} pool has zero {field}")]
    EmptyPool { tier: usize, field: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
