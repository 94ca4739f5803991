//! Command handlers for rollodds CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod levels;
pub mod odds;
