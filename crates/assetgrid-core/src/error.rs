//! Error types for AssetGrid

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for AssetGrid operations
///
/// Filtering itself never fails: a card with missing fields is evaluated on
/// whatever fields it has. These errors cover loading the card set and the
/// configuration.
#[derive(Error, Debug)]
pub enum GridError {
    /// Inventory file does not exist
    #[error("Inventory not found: {0}")]
    InventoryNotFound(PathBuf),

    /// Two cards share the same identifier
    #[error("Duplicate card id: {0}")]
    DuplicateCard(String),

    /// Configuration is well-formed JSON but unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GridError
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::DuplicateCard("PC01".to_string());
        assert_eq!(format!("{}", err), "Duplicate card id: PC01");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let grid_err: GridError = io_err.into();
        assert!(matches!(grid_err, GridError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let grid_err: GridError = json_err.into();
        assert!(matches!(grid_err, GridError::Json(_)));
    }
}
