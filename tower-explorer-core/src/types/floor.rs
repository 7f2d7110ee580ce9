//! Floor type definition

use serde::Serialize;

use super::Apartment;

/// A numbered level of a tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Floor {
    /// `floor-{number}`
    pub id: String,
    /// 1-based floor number
    pub number: u32,
    pub apartments: Vec<Apartment>,
}

impl Floor {
    pub fn new(number: u32, apartments: Vec<Apartment>) -> Self {
        Self {
            id: format!("floor-{number}"),
            number,
            apartments,
        }
    }

    /// Position of an apartment on this floor
    pub fn apartment_index(&self, apartment_id: &str) -> Option<usize> {
        self.apartments.iter().position(|apt| apt.id == apartment_id)
    }
}
