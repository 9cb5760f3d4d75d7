//! Theme for AssetGrid.

mod styles;

pub use styles::GLOBAL_STYLES;
