//! Page components for AssetGrid.

mod asset_detail;
mod home;

pub use asset_detail::AssetDetail;
pub use home::Home;
