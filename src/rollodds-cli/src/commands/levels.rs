//! Show the shop odds and pool tables in use

use anyhow::Result;
use rollodds::{Level, RollTables, Tier};
use std::fmt::Write as _;

use crate::cli::{OutputFormat, TablesArgs};
use crate::config::Config;
use crate::loader;

pub fn handle(args: &TablesArgs, format: OutputFormat, config: &Config) -> Result<()> {
    let loaded = loader::resolve_tables(args, config)?;
    print!("{}", render(&loaded.tables, &loaded.label, format)?);
    Ok(())
}

pub fn render(tables: &RollTables, label: &str, format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", tables.to_json()?)?;
        }
        OutputFormat::Csv => {
            let header: Vec<String> = Tier::all().map(|t| format!("tier{}", t)).collect();
            writeln!(out, "level,{}", header.join(","))?;
            for level in Level::all() {
                let cells: Vec<String> = Tier::all()
                    .map(|tier| tables.shop_odds(level, tier).to_string())
                    .collect();
                writeln!(out, "{},{}", level, cells.join(","))?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "Shop odds by level ({})", label)?;
            writeln!(out)?;
            write!(out, "{:<6}", "Level")?;
            for tier in Tier::all() {
                write!(out, " {:>7}", format!("{}-cost", tier))?;
            }
            writeln!(out)?;
            writeln!(out, "{}", "-".repeat(6 + 8 * Tier::all().count()))?;

            for level in Level::all() {
                write!(out, "{:<6}", level)?;
                for tier in Tier::all() {
                    write!(out, " {:>6.0}%", tables.shop_odds(level, tier) * 100.0)?;
                }
                writeln!(out)?;
            }

            writeln!(out)?;
            writeln!(out, "{:<10} {:>8} {:>8} {:>8}", "Tier", "Copies", "Units", "Pool")?;
            for tier in Tier::all() {
                writeln!(
                    out,
                    "{:<10} {:>8} {:>8} {:>8}",
                    tier.name(),
                    tables.pool.copies_per_unit(tier),
                    tables.pool.distinct_units(tier),
                    tables.pool.tier_pool_size(tier)
                )?;
            }
        }
    }
    Ok(out)
}
