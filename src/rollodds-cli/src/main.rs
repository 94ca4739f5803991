mod cli;
mod commands;
mod config;
mod loader;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

/// Log to stderr so stdout stays clean for csv/json output
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "rollodds=warn,rollodds_cli=warn",
        1 => "rollodds=debug,rollodds_cli=debug",
        _ => "rollodds=trace,rollodds_cli=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    tracing::debug!(path = %config_path.display(), "using config file");

    let load_config = || Config::load(&config_path);

    match cli.command {
        Commands::Odds {
            query,
            gold,
            format,
        } => commands::odds::odds(&query, gold, format, &load_config()?)?,

        Commands::Gold {
            query,
            target,
            limit,
            format,
        } => commands::odds::gold(&query, target, limit, format, &load_config()?)?,

        Commands::Table {
            query,
            limit,
            format,
        } => commands::odds::table(&query, limit, format, &load_config()?)?,

        Commands::Levels { tables, format } => {
            commands::levels::handle(&tables, format, &load_config()?)?;
        }

        Commands::Configure {
            set,
            level,
            tables,
            clear_tables,
            show,
        } => {
            let update = commands::configure::ConfigUpdate {
                set,
                level,
                tables,
                clear_tables,
            };
            commands::configure::handle(&config_path, update, show)?;
        }
    }

    Ok(())
}
