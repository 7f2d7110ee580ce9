//! Drill-down navigation state machine
//!
//! ```text
//! TowerList ──select_tower──▶ FloorList ──select_floor──▶ ApartmentGrid ──select_apartment──▶ ApartmentDetail
//!     ▲                           │                            │                                  │
//!     └───────────back────────────┘◀───────────back────────────┘◀──────────────back───────────────┘
//! ```
//!
//! The active view is an explicit enum: a floor cannot be selected without a
//! tower, nor an apartment without a floor. Selecting a tower (from any view)
//! regenerates its floors and lands on `FloorList`.

use std::mem;

use rand::Rng;
use serde::Serialize;

use crate::error::{ExplorerError, ExplorerResult};
use crate::generator::generate_floors;
use crate::types::{find_tower, Apartment, Floor, Tower, TOWERS};

/// A selected tower together with the floors generated for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TowerSelection {
    pub tower: &'static Tower,
    pub floors: Vec<Floor>,
}

impl TowerSelection {
    /// Selects `tower` and generates all of its floors.
    pub fn generate<R: Rng>(tower: &'static Tower, rng: &mut R) -> Self {
        Self {
            tower,
            floors: generate_floors(tower.floors, rng),
        }
    }

    /// Index of floor `number` in `floors`
    pub fn floor_index(&self, number: u32) -> Option<usize> {
        self.floors.iter().position(|floor| floor.number == number)
    }
}

/// Which of the four views is active, and what it shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Overview of all towers
    #[default]
    TowerList,
    /// Floors of the selected tower
    FloorList { selection: TowerSelection },
    /// Apartments of one floor
    ApartmentGrid {
        selection: TowerSelection,
        floor: usize,
    },
    /// A single apartment
    ApartmentDetail {
        selection: TowerSelection,
        floor: usize,
        apartment: usize,
    },
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::TowerList => ViewKind::TowerList,
            ViewState::FloorList { .. } => ViewKind::FloorList,
            ViewState::ApartmentGrid { .. } => ViewKind::ApartmentGrid,
            ViewState::ApartmentDetail { .. } => ViewKind::ApartmentDetail,
        }
    }

    pub fn selection(&self) -> Option<&TowerSelection> {
        match self {
            ViewState::TowerList => None,
            ViewState::FloorList { selection }
            | ViewState::ApartmentGrid { selection, .. }
            | ViewState::ApartmentDetail { selection, .. } => Some(selection),
        }
    }

    fn into_selection(self) -> Option<TowerSelection> {
        match self {
            ViewState::TowerList => None,
            ViewState::FloorList { selection }
            | ViewState::ApartmentGrid { selection, .. }
            | ViewState::ApartmentDetail { selection, .. } => Some(selection),
        }
    }

    /// Index of the selected floor within the selection
    pub fn floor_index(&self) -> Option<usize> {
        match self {
            ViewState::ApartmentGrid { floor, .. } | ViewState::ApartmentDetail { floor, .. } => {
                Some(*floor)
            }
            _ => None,
        }
    }

    /// Index of the selected apartment within the selected floor
    pub fn apartment_index(&self) -> Option<usize> {
        match self {
            ViewState::ApartmentDetail { apartment, .. } => Some(*apartment),
            _ => None,
        }
    }

    pub fn floor(&self) -> Option<&Floor> {
        self.selection()?.floors.get(self.floor_index()?)
    }

    pub fn apartment(&self) -> Option<&Apartment> {
        self.floor()?.apartments.get(self.apartment_index()?)
    }
}

/// Tag-only view of [`ViewState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    TowerList,
    FloorList,
    ApartmentGrid,
    ApartmentDetail,
}

impl ViewKind {
    /// Number of selections this view needs (0 for the tower list)
    pub fn depth(self) -> usize {
        match self {
            ViewKind::TowerList => 0,
            ViewKind::FloorList => 1,
            ViewKind::ApartmentGrid => 2,
            ViewKind::ApartmentDetail => 3,
        }
    }

    /// The view `back()` leads to
    pub fn parent(self) -> Option<ViewKind> {
        match self {
            ViewKind::TowerList => None,
            ViewKind::FloorList => Some(ViewKind::TowerList),
            ViewKind::ApartmentGrid => Some(ViewKind::FloorList),
            ViewKind::ApartmentDetail => Some(ViewKind::ApartmentGrid),
        }
    }
}

/// Owns the navigation state and the random source used to regenerate floors.
#[derive(Debug)]
pub struct Navigator<R> {
    rng: R,
    state: ViewState,
}

impl<R: Rng> Navigator<R> {
    /// Starts at the tower list.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            state: ViewState::TowerList,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn kind(&self) -> ViewKind {
        self.state.kind()
    }

    /// All towers (independent of the current view)
    pub fn towers(&self) -> &'static [Tower] {
        &TOWERS
    }

    pub fn selected_tower(&self) -> Option<&'static Tower> {
        self.state.selection().map(|selection| selection.tower)
    }

    /// Floors of the selected tower; empty at the tower list
    pub fn floors(&self) -> &[Floor] {
        self.state
            .selection()
            .map(|selection| selection.floors.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_floor(&self) -> Option<&Floor> {
        self.state.floor()
    }

    pub fn selected_apartment(&self) -> Option<&Apartment> {
        self.state.apartment()
    }

    /// Selects a tower, regenerating its floors. Valid from every view.
    pub fn select_tower(&mut self, tower_id: &str) -> ExplorerResult<()> {
        let tower =
            find_tower(tower_id).ok_or_else(|| ExplorerError::TowerNotFound(tower_id.to_string()))?;
        let selection = TowerSelection::generate(tower, &mut self.rng);
        log::debug!(
            "Selected {} ({} floors generated)",
            tower.id,
            selection.floors.len()
        );
        self.state = ViewState::FloorList { selection };
        Ok(())
    }

    /// Selects a floor of the current tower and clears the apartment selection.
    pub fn select_floor(&mut self, number: u32) -> ExplorerResult<()> {
        let selection = self
            .state
            .selection()
            .ok_or(ExplorerError::NoTowerSelected)?;
        let floor = selection
            .floor_index(number)
            .ok_or(ExplorerError::FloorNotFound(number))?;

        if let Some(selection) = mem::take(&mut self.state).into_selection() {
            log::debug!("Selected floor {number} of {}", selection.tower.id);
            self.state = ViewState::ApartmentGrid { selection, floor };
        }
        Ok(())
    }

    /// Selects an apartment on the current floor.
    pub fn select_apartment(&mut self, apartment_id: &str) -> ExplorerResult<()> {
        let floor = self
            .state
            .floor_index()
            .ok_or(ExplorerError::NoFloorSelected)?;
        let apartment = self
            .state
            .floor()
            .and_then(|f| f.apartment_index(apartment_id))
            .ok_or_else(|| ExplorerError::ApartmentNotFound(apartment_id.to_string()))?;

        if let Some(selection) = mem::take(&mut self.state).into_selection() {
            log::debug!("Selected apartment {apartment_id}");
            self.state = ViewState::ApartmentDetail {
                selection,
                floor,
                apartment,
            };
        }
        Ok(())
    }

    /// Moves one level up. Returns `false` when already at the tower list.
    pub fn back(&mut self) -> bool {
        self.state = match mem::take(&mut self.state) {
            ViewState::TowerList => return false,
            ViewState::FloorList { .. } => ViewState::TowerList,
            ViewState::ApartmentGrid { selection, .. } => ViewState::FloorList { selection },
            ViewState::ApartmentDetail {
                selection, floor, ..
            } => ViewState::ApartmentGrid { selection, floor },
        };
        log::debug!("Back to {:?}", self.state.kind());
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generator::APARTMENTS_PER_FLOOR;

    fn navigator() -> Navigator<StdRng> {
        Navigator::new(StdRng::seed_from_u64(2024))
    }

    /// Navigator parked on the detail view of the first apartment of floor 5 of Tower A
    fn at_detail() -> Navigator<StdRng> {
        let mut nav = navigator();
        nav.select_tower("tower-a").unwrap();
        nav.select_floor(5).unwrap();
        let id = nav.selected_floor().unwrap().apartments[0].id.clone();
        nav.select_apartment(&id).unwrap();
        nav
    }

    #[test]
    fn starts_at_tower_list() {
        let nav = navigator();
        assert_eq!(nav.kind(), ViewKind::TowerList);
        assert!(nav.selected_tower().is_none());
        assert!(nav.floors().is_empty());
        assert_eq!(nav.towers().len(), 3);
    }

    #[test]
    fn browse_scenario() {
        let mut nav = navigator();

        nav.select_tower("tower-a").unwrap();
        assert_eq!(nav.kind(), ViewKind::FloorList);
        assert_eq!(nav.floors().len(), 15);

        nav.select_floor(5).unwrap();
        assert_eq!(nav.kind(), ViewKind::ApartmentGrid);
        let floor = nav.selected_floor().unwrap().clone();
        assert_eq!(floor.number, 5);
        assert_eq!(floor.apartments.len(), APARTMENTS_PER_FLOOR as usize);

        let first = floor.apartments[0].clone();
        nav.select_apartment(&first.id).unwrap();
        assert_eq!(nav.kind(), ViewKind::ApartmentDetail);
        let shown = nav.selected_apartment().unwrap();
        assert_eq!(shown.unit_type, first.unit_type);
        assert_eq!(shown.formatted_price(), first.formatted_price());

        assert!(nav.back());
        assert_eq!(nav.kind(), ViewKind::ApartmentGrid);
        assert_eq!(nav.selected_floor(), Some(&floor));
        assert!(nav.selected_apartment().is_none());
    }

    #[test]
    fn back_moves_exactly_one_level() {
        let mut nav = at_detail();

        assert!(nav.back());
        assert_eq!(nav.kind(), ViewKind::ApartmentGrid);
        assert_eq!(nav.selected_floor().map(|f| f.number), Some(5));

        assert!(nav.back());
        assert_eq!(nav.kind(), ViewKind::FloorList);
        assert!(nav.selected_floor().is_none());
        assert_eq!(nav.selected_tower().map(|t| t.id), Some("tower-a"));

        assert!(nav.back());
        assert_eq!(nav.kind(), ViewKind::TowerList);
        assert!(nav.selected_tower().is_none());

        assert!(!nav.back());
        assert_eq!(nav.kind(), ViewKind::TowerList);
    }

    #[test]
    fn back_keeps_generated_floors() {
        let mut nav = at_detail();
        let floors = nav.floors().to_vec();
        nav.back();
        nav.back();
        assert_eq!(nav.floors(), floors.as_slice());
    }

    #[test]
    fn select_tower_resets_deeper_selections() {
        let mut nav = at_detail();
        nav.select_tower("tower-c").unwrap();
        assert_eq!(nav.kind(), ViewKind::FloorList);
        assert_eq!(nav.floors().len(), 18);
        assert!(nav.selected_floor().is_none());
        assert!(nav.selected_apartment().is_none());

        nav.select_floor(2).unwrap();
        nav.select_tower("tower-b").unwrap();
        assert_eq!(nav.kind(), ViewKind::FloorList);
        assert_eq!(nav.floors().len(), 12);
        assert!(nav.selected_floor().is_none());
    }

    #[test]
    fn reselecting_a_tower_regenerates_floors() {
        let mut nav = navigator();
        nav.select_tower("tower-c").unwrap();
        let first = nav.floors().to_vec();
        nav.select_tower("tower-c").unwrap();
        assert_eq!(nav.floors().len(), first.len());
        assert_ne!(nav.floors(), first.as_slice());
    }

    #[test]
    fn select_floor_from_detail_clears_apartment() {
        let mut nav = at_detail();
        nav.select_floor(7).unwrap();
        assert_eq!(nav.kind(), ViewKind::ApartmentGrid);
        assert_eq!(nav.selected_floor().map(|f| f.number), Some(7));
        assert!(nav.selected_apartment().is_none());
    }

    #[test]
    fn select_apartment_from_detail_replaces_apartment() {
        let mut nav = at_detail();
        let last = nav.selected_floor().unwrap().apartments[3].id.clone();
        nav.select_apartment(&last).unwrap();
        assert_eq!(nav.selected_apartment().map(|a| a.id.as_str()), Some(last.as_str()));
    }

    #[test]
    fn unknown_tower_is_rejected() {
        let mut nav = navigator();
        assert_eq!(
            nav.select_tower("tower-x"),
            Err(ExplorerError::TowerNotFound("tower-x".to_string()))
        );
        assert_eq!(nav.kind(), ViewKind::TowerList);
    }

    #[test]
    fn floor_requires_tower() {
        let mut nav = navigator();
        assert_eq!(nav.select_floor(1), Err(ExplorerError::NoTowerSelected));
        assert_eq!(nav.kind(), ViewKind::TowerList);
    }

    #[test]
    fn floor_out_of_range_keeps_state() {
        let mut nav = navigator();
        nav.select_tower("tower-b").unwrap();
        assert_eq!(nav.select_floor(0), Err(ExplorerError::FloorNotFound(0)));
        assert_eq!(nav.select_floor(13), Err(ExplorerError::FloorNotFound(13)));
        assert_eq!(nav.kind(), ViewKind::FloorList);
        assert_eq!(nav.floors().len(), 12);
    }

    #[test]
    fn apartment_requires_floor() {
        let mut nav = navigator();
        assert_eq!(
            nav.select_apartment("apt-1-1"),
            Err(ExplorerError::NoFloorSelected)
        );
        nav.select_tower("tower-a").unwrap();
        assert_eq!(
            nav.select_apartment("apt-1-1"),
            Err(ExplorerError::NoFloorSelected)
        );
        assert_eq!(nav.kind(), ViewKind::FloorList);
    }

    #[test]
    fn apartment_must_be_on_selected_floor() {
        let mut nav = navigator();
        nav.select_tower("tower-a").unwrap();
        nav.select_floor(3).unwrap();
        assert_eq!(
            nav.select_apartment("apt-4-1"),
            Err(ExplorerError::ApartmentNotFound("apt-4-1".to_string()))
        );
        assert_eq!(nav.kind(), ViewKind::ApartmentGrid);
    }

    #[test]
    fn view_kind_hierarchy() {
        assert_eq!(ViewKind::TowerList.parent(), None);
        assert_eq!(ViewKind::ApartmentDetail.parent(), Some(ViewKind::ApartmentGrid));
        assert_eq!(ViewKind::ApartmentDetail.depth(), 3);
        assert_eq!(ViewKind::FloorList.depth(), 1);
    }
}
