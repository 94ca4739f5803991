//! Shared argument groups

use clap::Args;
use rollodds::PoolVariant;
use std::path::PathBuf;

/// Where the odds and pool tables come from
#[derive(Args, Debug, Clone, Default)]
pub struct TablesArgs {
    /// Game set to use: 11 or 12 (uses configured default if not provided)
    #[arg(short, long)]
    pub set: Option<PoolVariant>,

    /// Custom tables file (JSON or YAML), overrides --set
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,
}

/// The unit being rolled for and the current pool state
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Cost tier of the wanted unit (1-5)
    #[arg(short, long)]
    pub tier: u8,

    /// Player level (1-11, uses configured default if not provided)
    #[arg(short, long)]
    pub level: Option<u8>,

    /// Copies of the wanted unit already out of the pool
    #[arg(short, long, default_value_t = 0)]
    pub copies: u32,

    /// Units of the same cost already out of the pool (including the wanted unit)
    #[arg(short, long, default_value_t = 0)]
    pub pool: u32,

    #[command(flatten)]
    pub tables: TablesArgs,
}
