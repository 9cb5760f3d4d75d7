//! Reusable UI components for the inventory page

mod filter_input;
mod product_card;
mod product_grid;

pub use filter_input::*;
pub use product_card::*;
pub use product_grid::*;
