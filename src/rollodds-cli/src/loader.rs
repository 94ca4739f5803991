//! Build an odds engine from CLI flags and the config file

use anyhow::{Context, Result};
use rollodds::{OddsEngine, PoolVariant, RollQuery, RollTables};
use std::fs;
use std::path::Path;

use crate::cli::{QueryArgs, TablesArgs};
use crate::config::Config;

/// Tables chosen for a run, with a label for display
pub struct LoadedTables {
    pub tables: RollTables,
    pub label: String,
}

/// Read a custom tables file, picking the parser from the extension
pub fn load_tables_file(path: &Path) -> Result<RollTables> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tables file: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let tables = if is_yaml {
        RollTables::from_yaml(&content)
    } else {
        RollTables::from_json(&content)
    };
    tables.with_context(|| format!("Invalid tables file: {}", path.display()))
}

/// Flags win over config; a tables file wins over a set number
pub fn resolve_tables(args: &TablesArgs, config: &Config) -> Result<LoadedTables> {
    if let Some(path) = args.tables.as_deref().or(config.tables.as_deref()) {
        tracing::debug!(path = %path.display(), "loading custom tables");
        return Ok(LoadedTables {
            tables: load_tables_file(path)?,
            label: format!("custom ({})", path.display()),
        });
    }

    let variant = match (args.set, config.set) {
        (Some(variant), _) => variant,
        (None, Some(set)) => PoolVariant::from_set(set)
            .with_context(|| format!("Invalid set {} in config file", set))?,
        (None, None) => PoolVariant::default(),
    };
    Ok(LoadedTables {
        tables: RollTables::builtin(variant),
        label: variant.to_string(),
    })
}

/// Turn query flags into a validated query
pub fn resolve_query(args: &QueryArgs, config: &Config) -> Result<RollQuery> {
    let level = args
        .level
        .or(config.level)
        .context("No level given: pass --level or set one with `rollodds configure --level`")?;

    Ok(RollQuery::new(args.tier, level, args.copies, args.pool)?)
}

/// Engine plus query for commands that calculate odds
pub fn resolve(args: &QueryArgs, config: &Config) -> Result<(OddsEngine, RollQuery, String)> {
    let loaded = resolve_tables(&args.tables, config)?;
    let query = resolve_query(args, config)?;
    Ok((OddsEngine::new(loaded.tables), query, loaded.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn query_args(level: Option<u8>) -> QueryArgs {
        QueryArgs {
            tier: 3,
            level,
            copies: 1,
            pool: 4,
            tables: TablesArgs::default(),
        }
    }

    #[test]
    fn test_default_set() {
        let loaded = resolve_tables(&TablesArgs::default(), &Config::default()).unwrap();
        assert_eq!(loaded.tables, RollTables::builtin(PoolVariant::Set12));
        assert_eq!(loaded.label, "Set 12");
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            set: Some(12),
            ..Default::default()
        };
        let args = TablesArgs {
            set: Some(PoolVariant::Set11),
            tables: None,
        };
        let loaded = resolve_tables(&args, &config).unwrap();
        assert_eq!(loaded.tables.pool, *PoolVariant::Set11.pool());
    }

    #[test]
    fn test_bad_config_set() {
        let config = Config {
            set: Some(3),
            ..Default::default()
        };
        assert!(resolve_tables(&TablesArgs::default(), &config).is_err());
    }

    #[test]
    fn test_level_from_config() {
        let config = Config {
            level: Some(7),
            ..Default::default()
        };
        let query = resolve_query(&query_args(None), &config).unwrap();
        assert_eq!(query.level.get(), 7);

        let query = resolve_query(&query_args(Some(9)), &config).unwrap();
        assert_eq!(query.level.get(), 9);
    }

    #[test]
    fn test_missing_level() {
        assert!(resolve_query(&query_args(None), &Config::default()).is_err());
    }

    #[test]
    fn test_invalid_level() {
        assert!(resolve_query(&query_args(Some(15)), &Config::default()).is_err());
    }

    #[test]
    fn test_load_json_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        let tables = RollTables::builtin(PoolVariant::Set11);
        fs::write(&path, tables.to_json().unwrap()).unwrap();

        let args = TablesArgs {
            set: Some(PoolVariant::Set12),
            tables: Some(path.clone()),
        };
        let loaded = resolve_tables(&args, &Config::default()).unwrap();
        assert_eq!(loaded.tables, tables);
        assert!(loaded.label.starts_with("custom"));
    }

    #[test]
    fn test_load_yaml_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.yml");
        let mut yaml = String::from("level_odds:\n");
        for row in rollodds::LEVEL_ODDS {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            yaml.push_str(&format!("  - [{}]\n", cells.join(", ")));
        }
        yaml.push_str("pool:\n  total_units: [30, 25, 18, 10, 9]\n");
        yaml.push_str("  distinct_items: [14, 13, 13, 12, 8]\n");
        fs::write(&path, yaml).unwrap();

        let tables = load_tables_file(&path).unwrap();
        assert_eq!(tables, RollTables::builtin(PoolVariant::Set12));
    }

    #[test]
    fn test_missing_tables_file() {
        assert!(load_tables_file(&PathBuf::from("/nonexistent/tables.json")).is_err());
    }
}
