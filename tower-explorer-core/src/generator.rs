//! Mock data generation
//!
//! Floors and apartments are placeholder data: every call draws fresh values
//! from the supplied random source. Pass a seeded `StdRng` for reproducible
//! output.

use rand::Rng;

use crate::types::{Apartment, Floor, UnitType};

/// Number of apartments on every floor
pub const APARTMENTS_PER_FLOOR: u32 = 4;

/// Area is `base_area + [0, AREA_SPREAD)` m²
const AREA_SPREAD: u32 = 20;

/// Price is `area * PRICE_PER_SQUARE_METER + [0, PRICE_SPREAD)`
const PRICE_PER_SQUARE_METER: u32 = 15;
const PRICE_SPREAD: u32 = 500;

/// Generates floors `1..=floor_count`, each with [`APARTMENTS_PER_FLOOR`] apartments.
pub fn generate_floors<R: Rng>(floor_count: u32, rng: &mut R) -> Vec<Floor> {
    (1..=floor_count)
        .map(|number| Floor::new(number, generate_apartments(number, &mut *rng)))
        .collect()
}

/// Generates the apartments of one floor.
pub fn generate_apartments<R: Rng>(floor_number: u32, rng: &mut R) -> Vec<Apartment> {
    (1..=APARTMENTS_PER_FLOOR)
        .map(|position| {
            let unit_type = UnitType::ALL[rng.random_range(0..UnitType::ALL.len())];
            let area = unit_type.base_area() + rng.random_range(0..AREA_SPREAD);
            let price = area * PRICE_PER_SQUARE_METER + rng.random_range(0..PRICE_SPREAD);
            Apartment::new(floor_number, position, unit_type, area, price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn floor_count_matches_request() {
        let mut rng = rng();
        for count in [1, 12, 15, 18] {
            let floors = generate_floors(count, &mut rng);
            assert_eq!(floors.len(), count as usize);
            assert!(floors
                .iter()
                .all(|f| f.apartments.len() == APARTMENTS_PER_FLOOR as usize));
        }
    }

    #[test]
    fn zero_floors_yields_empty_tower() {
        assert!(generate_floors(0, &mut rng()).is_empty());
    }

    #[test]
    fn floors_are_numbered_in_order() {
        let floors = generate_floors(6, &mut rng());
        let numbers: Vec<u32> = floors.iter().map(|f| f.number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6]);
        assert_eq!(floors[3].id, "floor-4");
    }

    #[test]
    fn apartment_ids_unique_within_floor() {
        let apartments = generate_apartments(9, &mut rng());
        let ids: Vec<&str> = apartments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["apt-9-1", "apt-9-2", "apt-9-3", "apt-9-4"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn attributes_stay_within_type_ranges() {
        let mut rng = rng();
        for floor in generate_floors(50, &mut rng) {
            for apt in floor.apartments {
                let base = apt.unit_type.base_area();
                assert!((base..base + AREA_SPREAD).contains(&apt.area), "{apt:?}");
                let base_price = apt.area * PRICE_PER_SQUARE_METER;
                assert!((base_price..base_price + PRICE_SPREAD).contains(&apt.price));
                assert_eq!(apt.rooms, apt.unit_type.rooms());
                assert_eq!(apt.bathrooms, apt.rooms.div_ceil(2));
            }
        }
    }

    #[test]
    fn same_seed_same_data() {
        let a = generate_floors(3, &mut StdRng::seed_from_u64(42));
        let b = generate_floors(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
