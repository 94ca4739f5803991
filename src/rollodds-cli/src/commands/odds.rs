//! Odds and gold command handlers
//!
//! Runs the engine for one query and prints the result as a table, CSV or
//! JSON.

use anyhow::Result;
use rollodds::{shops_for_gold, Distribution, GoldSearch, OddsEngine, RollQuery, SearchOptions};
use serde::Serialize;
use std::fmt::Write as _;

use crate::cli::{OutputFormat, QueryArgs};
use crate::config::Config;
use crate::loader;

/// Everything printed by `rollodds odds`
#[derive(Debug, Serialize)]
pub struct OddsReport {
    pub tables: String,
    #[serde(flatten)]
    pub query: RollQuery,
    pub gold: u32,
    pub shops: u32,
    pub hit_probability: f64,
    pub distribution: Distribution,
}

/// One row of `rollodds table` / the answer of `rollodds gold`
#[derive(Debug, Serialize)]
pub struct GoldRow {
    pub target: f64,
    pub result: GoldSearch,
}

pub fn odds(args: &QueryArgs, gold: u32, format: OutputFormat, config: &Config) -> Result<()> {
    let (engine, query, label) = loader::resolve(args, config)?;
    let report = build_report(&engine, query, gold, label);
    print!("{}", render_report(&report, format)?);
    Ok(())
}

pub fn gold(
    args: &QueryArgs,
    target: f64,
    limit: u32,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let (engine, query, _) = loader::resolve(args, config)?;
    let engine = engine.with_search_options(SearchOptions { gold_limit: limit });
    let row = GoldRow {
        target,
        result: engine.gold_required(target, &query)?,
    };
    print!("{}", render_gold_rows(std::slice::from_ref(&row), format)?);
    Ok(())
}

pub fn table(args: &QueryArgs, limit: u32, format: OutputFormat, config: &Config) -> Result<()> {
    let (engine, query, _) = loader::resolve(args, config)?;
    let engine = engine.with_search_options(SearchOptions { gold_limit: limit });
    let rows: Vec<GoldRow> = engine
        .gold_table(&query)?
        .iter()
        .enumerate()
        .map(|(idx, &result)| GoldRow {
            target: (idx + 1) as f64,
            result,
        })
        .collect();
    print!("{}", render_gold_rows(&rows, format)?);
    Ok(())
}

pub fn build_report(engine: &OddsEngine, query: RollQuery, gold: u32, label: String) -> OddsReport {
    OddsReport {
        tables: label,
        query,
        gold,
        shops: shops_for_gold(gold),
        hit_probability: engine.hit_probability(&query),
        distribution: engine.distribution(&query, gold),
    }
}

pub fn render_report(report: &OddsReport, format: OutputFormat) -> Result<String> {
    let dist = &report.distribution;
    let mut out = String::new();

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "copies,exactly,at_least")?;
            for (k, (exact, at_least)) in dist.exact.iter().zip(&dist.cumulative).enumerate() {
                writeln!(out, "{},{},{}", k, exact, at_least)?;
            }
        }
        OutputFormat::Table => {
            let q = &report.query;
            writeln!(
                out,
                "Tier {} ({}) at level {}, {}",
                q.tier,
                q.tier.name(),
                q.level,
                report.tables
            )?;
            writeln!(
                out,
                "Out of pool: {} copies, {} same-cost units",
                q.state.owned_copies, q.state.owned_same_tier
            )?;
            writeln!(
                out,
                "Gold: {} ({} shops), hit chance per slot: {:.2}%",
                report.gold,
                report.shops,
                report.hit_probability * 100.0
            )?;
            writeln!(out)?;
            writeln!(out, "{:<8} {:>10} {:>10}", "Copies", "Exactly", "At least")?;
            writeln!(out, "{}", "-".repeat(30))?;

            let rounded = dist.cumulative_rounded();
            for k in 0..rollodds::STATE_COUNT {
                let copies = if k == rollodds::MAX_COPIES {
                    format!("{}+", k)
                } else {
                    k.to_string()
                };
                writeln!(
                    out,
                    "{:<8} {:>10.4} {:>10.2}",
                    copies, dist.exact[k], rounded[k]
                )?;
            }
            writeln!(out)?;
            writeln!(out, "Expected Value: {:.2}", dist.expected_value)?;
        }
    }
    Ok(out)
}

pub fn render_gold_rows(rows: &[GoldRow], format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Json => {
            let json = if let [row] = rows {
                serde_json::to_string_pretty(row)?
            } else {
                serde_json::to_string_pretty(rows)?
            };
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "target,gold")?;
            for row in rows {
                let gold = row.result.gold().map(|g| g.to_string()).unwrap_or_default();
                writeln!(out, "{},{}", row.target, gold)?;
            }
        }
        OutputFormat::Table => {
            for row in rows {
                writeln!(out, "Gold for EV = {}: {}", row.target, row.result)?;
            }
        }
    }
    Ok(out)
}
