//! Inventory context provider for AssetGrid.
//!
//! Command-line settings are stored once before launch; the loaded
//! inventory and the grid's display state are shared with every page via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let inventory = use_inventory();
//! let display = use_display();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use assetgrid_core::{Inventory, Selectors, VisibilityMap};
use dioxus::prelude::*;

/// Settings resolved from the command line and config file
#[derive(Clone, Debug, Default)]
pub struct AppSettings {
    /// Inventory file; `None` uses the built-in sample
    pub inventory_path: Option<PathBuf>,
    /// Filter text evaluated once the inventory loads
    pub initial_query: String,
    pub selectors: Selectors,
}

static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Store settings before launch. Later calls are ignored.
pub fn set_settings(settings: AppSettings) {
    let _ = SETTINGS.set(settings);
}

/// Settings for this run (defaults if never set)
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Where the inventory came from and whether it is ready
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InventoryState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Hook to access the loaded inventory.
pub fn use_inventory() -> Signal<Inventory> {
    use_context::<Signal<Inventory>>()
}

/// Hook to check the inventory load state.
pub fn use_inventory_state() -> Signal<InventoryState> {
    use_context::<Signal<InventoryState>>()
}

/// Hook to access per-card display state.
///
/// Shared so the grid keeps its filter when navigating to a card and back.
pub fn use_display() -> Signal<VisibilityMap> {
    use_context::<Signal<VisibilityMap>>()
}

/// Hook to access the current filter text.
pub fn use_query() -> Signal<FilterQuery> {
    use_context::<Signal<FilterQuery>>()
}

/// Current filter text, kept in context alongside the display state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterQuery(pub String);
