//! CLI argument definitions for rollodds
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod query;

pub use core::{Cli, Commands};
pub use query::{QueryArgs, TablesArgs};

/// Output format for calculation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}
