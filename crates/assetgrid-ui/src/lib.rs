//! AssetGrid UI Components
//!
//! Dioxus components for the asset inventory page: the filter input, the
//! product grid and the individual product cards.
//!
//! Every element carries the stable id/classes from
//! [`assetgrid_core::Selectors`] and the per-field classes from
//! [`assetgrid_core::CardField::css_class`], so the rendered markup matches
//! what the filter controller evaluates.

pub mod components;

pub use components::*;
