#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use assetgrid_core::GridConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppSettings;

/// AssetGrid - live-filtered asset inventory
#[derive(Parser, Debug)]
#[command(name = "assetgrid-desktop")]
#[command(about = "AssetGrid - browse and filter an asset inventory")]
struct Args {
    /// Inventory JSON file (default: from config, else a built-in sample)
    #[arg(short, long)]
    inventory: Option<PathBuf>,

    /// Config file (default: <config dir>/assetgrid/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial filter text, applied once the inventory is loaded
    #[arg(short, long, default_value = "")]
    query: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    assetgrid_core::logging::init(args.verbose);

    let config = GridConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;

    let inventory_path = args.inventory.or(config.inventory);

    tracing::info!(
        "Starting with inventory: {}",
        inventory_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in sample)".to_string())
    );

    context::set_settings(AppSettings {
        inventory_path,
        initial_query: args.query,
        selectors: config.selectors,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AssetGrid")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
