//! AssetGrid Core Library
//!
//! Live filtering of an asset inventory rendered as a grid of cards.
//!
//! ## Overview
//!
//! Every keystroke in the filter input re-evaluates every card in the grid.
//! A card stays visible when the query, uppercased, is a substring of at
//! least one of its five searchable fields (title, model/make, service tag,
//! user, computer name), also uppercased. An empty query shows everything.
//!
//! Matching is pure and UI-free ([`plan`], [`Query::matches`]); applying
//! the result is a separate step against a [`VisibilitySink`]. A card with
//! missing fields is matched on the fields it has.
//!
//! ## Quick Start
//!
//! ```
//! use assetgrid_core::{FilterController, Inventory, VisibilityMap};
//!
//! let inventory = Inventory::sample();
//! let mut display = VisibilityMap::new();
//!
//! let report = FilterController::new("pc0", &inventory).evaluate(&mut display);
//! assert_eq!(report.visible, inventory.len());
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod logging;
pub mod query;
pub mod visibility;

// Re-exports
pub use card::{AssetKind, Card, CardDetails, CardElement, CardField, CardId};
pub use config::{GridConfig, Selectors};
pub use error::{GridError, GridResult};
pub use filter::{apply, plan, CardSource, FilterController, FilterReport};
pub use inventory::Inventory;
pub use query::{Query, QuerySource};
pub use visibility::{Visibility, VisibilityMap, VisibilitySink, VisibilityUpdate};
