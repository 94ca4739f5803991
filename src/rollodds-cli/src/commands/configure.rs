//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up rollodds CLI defaults.

use anyhow::{Context, Result};
use rollodds::{Level, PoolVariant};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Requested changes to the stored defaults
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub set: Option<u32>,
    pub level: Option<u8>,
    pub tables: Option<PathBuf>,
    pub clear_tables: bool,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.set.is_none() && self.level.is_none() && self.tables.is_none() && !self.clear_tables
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `path` - Config file location
/// * `update` - Values to store
/// * `show` - If true, show current configuration
pub fn handle(path: &Path, update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load(path)?;

    if show {
        print!("{}", describe(&config, path));
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, update)?;
    config.save(path)?;

    print!("{}", describe(&config, path));
    Ok(())
}

/// Validate and merge an update into the config
pub fn apply(config: &mut Config, update: ConfigUpdate) -> Result<()> {
    if let Some(set) = update.set {
        PoolVariant::from_set(set).context("Cannot store set")?;
        config.set = Some(set);
    }
    if let Some(level) = update.level {
        Level::new(level).context("Cannot store level")?;
        config.level = Some(level);
    }
    if update.clear_tables {
        config.tables = None;
    } else if let Some(tables) = update.tables {
        config.tables = Some(tables);
    }
    Ok(())
}

/// Display current configuration
fn describe(config: &Config, path: &Path) -> String {
    let mut out = String::new();
    match config.set {
        Some(set) => out.push_str(&format!("Set: {}\n", set)),
        None => out.push_str(&format!("Set: {} (default)\n", PoolVariant::default())),
    }
    match config.level {
        Some(level) => out.push_str(&format!("Level: {}\n", level)),
        None => out.push_str("Level: not configured\n"),
    }
    if let Some(tables) = &config.tables {
        out.push_str(&format!("Tables file: {}\n", tables.display()));
    }
    out.push_str(&format!("Config file: {}\n", path.display()));
    out
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: rollodds configure --set 12 --level 8");
    println!("   or: rollodds configure --tables my_tables.json");
    println!("   or: rollodds configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_valid_update() {
        let mut config = Config::default();
        apply(
            &mut config,
            ConfigUpdate {
                set: Some(11),
                level: Some(9),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.set, Some(11));
        assert_eq!(config.level, Some(9));
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();
        let bad_set = ConfigUpdate {
            set: Some(7),
            ..Default::default()
        };
        assert!(apply(&mut config, bad_set).is_err());

        let bad_level = ConfigUpdate {
            level: Some(0),
            ..Default::default()
        };
        assert!(apply(&mut config, bad_level).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_clear_tables() {
        let mut config = Config {
            tables: Some(PathBuf::from("custom.json")),
            ..Default::default()
        };
        apply(
            &mut config,
            ConfigUpdate {
                clear_tables: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.tables, None);
    }

    #[test]
    fn test_handle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        handle(
            &path,
            ConfigUpdate {
                level: Some(6),
                ..Default::default()
            },
            false,
        )
        .unwrap();
        assert_eq!(Config::load(&path).unwrap().level, Some(6));
    }

    #[test]
    fn test_describe_defaults() {
        let text = describe(&Config::default(), Path::new("/tmp/config.toml"));
        assert!(text.contains("Set: Set 12 (default)"));
        assert!(text.contains("Level: not configured"));
    }
}
