//! Tower Explorer Core Library
//!
//! Provides the platform-independent logic behind the Tower Explorer browser:
//! - Static tower catalogue and generated floors/apartments (`types`)
//! - Mock data generation over an injectable random source (`generator`)
//! - The tower → floor → apartment drill-down state machine (`navigation`)
//!
//! The library knows nothing about terminals; front-ends drive a
//! [`Navigator`] and read its [`ViewState`] to decide what to draw.

pub mod error;
pub mod generator;
pub mod navigation;
pub mod types;
pub mod utils;

// Re-export common types
pub use error::{ExplorerError, ExplorerResult};
pub use generator::{generate_apartments, generate_floors, APARTMENTS_PER_FLOOR};
pub use navigation::{Navigator, TowerSelection, ViewKind, ViewState};
pub use types::{find_tower, AccentColor, Apartment, Floor, PlaceholderImage, Tower, UnitType, TOWERS};
