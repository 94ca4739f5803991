//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::query::{QueryArgs, TablesArgs};
use super::OutputFormat;

#[derive(Parser)]
#[command(name = "rollodds")]
#[command(about = "Shop-roll odds calculator", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(long, global = true, env = "ROLLODDS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chance of hitting each number of copies for a gold budget
    #[command(visible_alias = "o")]
    Odds {
        #[command(flatten)]
        query: QueryArgs,

        /// Gold to spend rolling
        #[arg(short, long)]
        gold: u32,

        /// Output format: table (default), csv, json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Smallest gold budget reaching a target expected number of copies
    #[command(visible_alias = "g")]
    Gold {
        #[command(flatten)]
        query: QueryArgs,

        /// Expected copies wanted
        #[arg(short = 'e', long, allow_hyphen_values = true)]
        target: f64,

        /// Give up above this much gold
        #[arg(long, default_value_t = rollodds::DEFAULT_GOLD_LIMIT)]
        limit: u32,

        /// Output format: table (default), csv, json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Gold needed for an expected 1 through 9 copies
    #[command(visible_alias = "t")]
    Table {
        #[command(flatten)]
        query: QueryArgs,

        /// Give up above this much gold
        #[arg(long, default_value_t = rollodds::DEFAULT_GOLD_LIMIT)]
        limit: u32,

        /// Output format: table (default), csv, json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show shop odds per level and pool sizes
    #[command(visible_alias = "l")]
    Levels {
        #[command(flatten)]
        tables: TablesArgs,

        /// Output format: table (default), csv, json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default game set (11 or 12)
        #[arg(long)]
        set: Option<u32>,

        /// Set default player level
        #[arg(long)]
        level: Option<u8>,

        /// Set default custom tables file
        #[arg(long, value_name = "FILE", conflicts_with = "clear_tables")]
        tables: Option<PathBuf>,

        /// Forget the custom tables file
        #[arg(long)]
        clear_tables: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rollodds::PoolVariant;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_odds() {
        let cli = Cli::try_parse_from([
            "rollodds", "odds", "-t", "4", "-l", "8", "-c", "2", "-p", "11", "-g", "50", "-s",
            "11",
        ])
        .unwrap();
        match cli.command {
            Commands::Odds {
                query,
                gold,
                format,
            } => {
                assert_eq!(query.tier, 4);
                assert_eq!(query.level, Some(8));
                assert_eq!(query.copies, 2);
                assert_eq!(query.pool, 11);
                assert_eq!(query.tables.set, Some(PoolVariant::Set11));
                assert_eq!(gold, 50);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("expected odds command"),
        }
    }

    #[test]
    fn test_parse_gold_alias() {
        let cli = Cli::try_parse_from([
            "rollodds", "g", "--tier", "3", "--target", "2.5", "--format", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Gold {
                query,
                target,
                limit,
                format,
            } => {
                assert_eq!(query.tier, 3);
                assert_eq!(query.level, None);
                assert_eq!(target, 2.5);
                assert_eq!(limit, rollodds::DEFAULT_GOLD_LIMIT);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected gold command"),
        }
    }

    #[test]
    fn test_parse_negative_target() {
        for args in [
            ["rollodds", "gold", "-t", "1", "-l", "3", "--target", "-1"],
            ["rollodds", "gold", "-t", "1", "-l", "3", "-e", "-1"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            match cli.command {
                Commands::Gold { target, query, .. } => {
                    assert_eq!(target, -1.0);
                    assert_eq!(query.level, Some(3));
                }
                _ => panic!("expected gold command"),
            }
        }
    }

    #[test]
    fn test_bad_set_rejected() {
        let result =
            Cli::try_parse_from(["rollodds", "odds", "-t", "1", "-g", "10", "--set", "9"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tables_conflict() {
        let result = Cli::try_parse_from([
            "rollodds",
            "configure",
            "--tables",
            "t.json",
            "--clear-tables",
        ]);
        assert!(result.is_err());
    }
}
