//! AssetGrid CLI
//!
//! Thin wrapper around assetgrid-core for command-line usage. Runs the same
//! evaluation the desktop grid runs on each keystroke and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! # Show the cards a query leaves visible
//! assetgrid --inventory inventory.json filter dell
//!
//! # Show every card with its visibility, as JSON
//! assetgrid -i inventory.json filter pc0 --all --format json
//!
//! # List every card
//! assetgrid -i inventory.json list
//!
//! # Report cards with missing searchable fields
//! assetgrid -i inventory.json check
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use assetgrid_core::{
    Card, CardElement, CardField, FilterController, GridConfig, Inventory, Visibility,
    VisibilityMap,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

/// AssetGrid - asset inventory filtering
#[derive(Parser)]
#[command(name = "assetgrid")]
#[command(version = "0.1.0")]
#[command(about = "AssetGrid - filter an asset inventory by title, model, service tag, user or computer name")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: <config dir>/assetgrid/config.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Inventory JSON file (default: from config)
    #[arg(short, long, global = true)]
    inventory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a query and print the visible cards
    Filter {
        /// Filter text (case-insensitive substring; empty matches all)
        query: String,

        /// Print every card with its visibility, not just visible ones
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print every card
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Report cards with missing searchable fields
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// One card in JSON output
#[derive(Serialize)]
struct CardOutput<'a> {
    #[serde(flatten)]
    card: &'a Card,
    visibility: Visibility,
}

/// JSON output of `filter`
#[derive(Serialize)]
struct FilterOutput<'a> {
    query: &'a str,
    total: usize,
    visible: usize,
    cards: Vec<CardOutput<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    assetgrid_core::logging::init(cli.verbose);

    let config =
        GridConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    let path = cli
        .inventory
        .or(config.inventory)
        .ok_or_else(|| anyhow!("no inventory given (use --inventory or set \"inventory\" in config)"))?;
    debug!("Using inventory {:?}", path);
    let inventory = Inventory::load(&path)
        .with_context(|| format!("failed to load inventory {}", path.display()))?;

    match cli.command {
        Commands::Filter { query, all, format } => {
            let mut display = VisibilityMap::new();
            let report = FilterController::new(query.as_str(), &inventory).evaluate(&mut display);
            info!(
                "Filter {:?} left {} of {} cards visible",
                query, report.visible, report.total
            );
            if report.malformed > 0 {
                debug!("{} cards matched on partial fields", report.malformed);
            }

            let shown: Vec<CardOutput> = inventory
                .cards()
                .iter()
                .map(|card| CardOutput {
                    card,
                    visibility: display.get(&card.id),
                })
                .filter(|out| all || out.visibility.is_visible())
                .collect();

            match format {
                Format::Json => {
                    let output = FilterOutput {
                        query: &query,
                        total: report.total,
                        visible: report.visible,
                        cards: shown,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Format::Table => {
                    for out in &shown {
                        if all {
                            println!("{:<8} {}", out.visibility, card_row(out.card));
                        } else {
                            println!("{}", card_row(out.card));
                        }
                    }
                    println!();
                    println!("{} of {} cards visible", report.visible, report.total);
                }
            }
        }

        Commands::List { format } => match format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&inventory)?),
            Format::Table => {
                for card in inventory.cards() {
                    println!("{}", card_row(card));
                }
                println!();
                println!("{} cards", inventory.len());
            }
        },

        Commands::Check => {
            let malformed = inventory.malformed();
            info!("Checked {} cards, {} incomplete", inventory.len(), malformed.len());
            for (card, missing) in &malformed {
                let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                println!("{}: missing {}", card.id, names.join(", "));
            }
            if malformed.is_empty() {
                println!("All {} cards have every searchable field", inventory.len());
            } else {
                println!();
                println!(
                    "{} of {} cards are missing fields (still filtered on the rest)",
                    malformed.len(),
                    inventory.len()
                );
            }
        }
    }

    Ok(())
}

/// One table line: id, kind, then the five searchable fields, `-` when
/// missing
fn card_row(card: &Card) -> String {
    let mut row = format!("{:<10} {:<15}", card.id.as_str(), card.kind);
    for field in CardField::ALL {
        let text = card.field_text(field).unwrap_or("-");
        let width = if field == CardField::Title { 24 } else { 14 };
        row.push_str(&format!(" {:<width$}", text, width = width));
    }
    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_row_marks_missing_fields() {
        let card = Card::new("PC01")
            .with_field(CardField::Title, "Dell Latitude")
            .with_field(CardField::User, "alice");

        let row = card_row(&card);
        assert!(row.starts_with("PC01"));
        assert!(row.contains("computer"));
        assert!(row.contains("Dell Latitude"));
        assert!(row.contains("alice"));
        assert_eq!(row.matches(" -").count(), 3);
    }

    #[test]
    fn cli_parses_filter_flags() {
        let cli = Cli::parse_from(["assetgrid", "-i", "inv.json", "filter", "dell", "--all", "--format", "json"]);
        assert_eq!(cli.inventory, Some(PathBuf::from("inv.json")));
        match cli.command {
            Commands::Filter { query, all, format } => {
                assert_eq!(query, "dell");
                assert!(all);
                assert_eq!(format, Format::Json);
            }
            _ => panic!("expected filter command"),
        }
    }
}
