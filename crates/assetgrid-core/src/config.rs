//! Configuration for AssetGrid front ends
//!
//! Holds the stable identifiers the grid is rendered with and an optional
//! default inventory path. Read from JSON; every key is optional.
//!
//! ```json
//! {
//!   "inventory": "/srv/assets/inventory.json",
//!   "selectors": { "input_id": "filterInput", "container_class": "products" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};

/// Stable element identifiers of the filter input, container and cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Element id of the filter input
    pub input_id: String,
    /// CSS class of the card container
    pub container_class: String,
    /// CSS class of each card
    pub card_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            input_id: "filterInput".to_string(),
            container_class: "products".to_string(),
            card_class: "cardd".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Inventory loaded when none is given on the command line
    pub inventory: Option<PathBuf>,
    pub selectors: Selectors,
}

impl GridConfig {
    /// Parse and validate configuration JSON
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file
    pub fn load(path: &Path) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `explicit` if given, else the default location if it exists,
    /// else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> GridResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject blank identifiers
    pub fn validate(&self) -> GridResult<()> {
        let selectors = [
            ("input_id", &self.selectors.input_id),
            ("container_class", &self.selectors.container_class),
            ("card_class", &self.selectors.card_class),
        ];
        for (name, value) in selectors {
            if value.trim().is_empty() {
                return Err(GridError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

/// Default configuration file (~/.config/assetgrid/config.json on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assetgrid").join("config.json"))
}
