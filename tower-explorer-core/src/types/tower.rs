//! Tower catalogue

use serde::Serialize;

/// Accent color of a tower, used by front-ends for its badge and floor chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Green,
    Purple,
}

/// A residential tower (static, immutable for the process lifetime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tower {
    /// Tower ID
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Declared number of floors
    #[serde(rename = "floorCount")]
    pub floors: u32,
    /// Accent color
    pub color: AccentColor,
}

/// The fixed tower set
pub static TOWERS: [Tower; 3] = [
    Tower {
        id: "tower-a",
        name: "Tower A",
        description: "Premium residential tower with city views",
        floors: 15,
        color: AccentColor::Blue,
    },
    Tower {
        id: "tower-b",
        name: "Tower B",
        description: "Modern apartments with garden access",
        floors: 12,
        color: AccentColor::Green,
    },
    Tower {
        id: "tower-c",
        name: "Tower C",
        description: "Luxury penthouses and executive suites",
        floors: 18,
        color: AccentColor::Purple,
    },
];

/// Looks up a tower by ID
#[must_use]
pub fn find_tower(id: &str) -> Option<&'static Tower> {
    TOWERS.iter().find(|tower| tower.id == id)
}
