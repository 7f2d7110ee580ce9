//! 类型定义模块

mod apartment;
mod floor;
mod tower;

pub use apartment::{Apartment, PlaceholderImage, UnitType};
pub use floor::Floor;
pub use tower::{find_tower, AccentColor, Tower, TOWERS};
