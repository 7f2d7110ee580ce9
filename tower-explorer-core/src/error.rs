//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Navigation error type
///
/// Every variant describes a transition whose precondition did not hold.
/// A failed transition never modifies the navigation state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ExplorerError {
    /// No tower with this identifier
    #[error("Tower not found: {0}")]
    TowerNotFound(String),

    /// A floor was requested before any tower was selected
    #[error("No tower selected")]
    NoTowerSelected,

    /// The selected tower has no floor with this number
    #[error("Floor not found: {0}")]
    FloorNotFound(u32),

    /// An apartment was requested before any floor was selected
    #[error("No floor selected")]
    NoFloorSelected,

    /// The selected floor has no apartment with this identifier
    #[error("Apartment not found: {0}")]
    ApartmentNotFound(String),
}

/// Core layer Result type alias
pub type ExplorerResult<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_serializes_with_code_tag() {
        let json = serde_json::to_value(ExplorerError::FloorNotFound(16)).unwrap();
        assert_eq!(json["code"], "FloorNotFound");
        assert_eq!(json["details"], 16);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ExplorerError::ApartmentNotFound("apt-1-9".to_string()).to_string(),
            "Apartment not found: apt-1-9"
        );
        assert_eq!(ExplorerError::NoFloorSelected.to_string(), "No floor selected");
    }
}
