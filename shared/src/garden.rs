//! # Garden Rules
//!
//! The activation cap for plants. Only a bounded number of plants may be
//! `active` at once; the cap is passed in by the caller so the same rule can
//! run against the configured limit on either side of the wire.
//!
//! The count is taken from whatever plant list the caller holds, so two
//! clients working from stale lists can still race past the cap. The backend
//! closes that gap with a conditional update.

use crate::{Plant, PlantState};

/// Number of plants currently in the `active` state
pub fn active_count(plants: &[Plant]) -> usize {
    plants
        .iter()
        .filter(|plant| plant.state == PlantState::Active)
        .count()
}

/// Whether `plant` may move to `active` given the rest of the garden
pub fn can_activate(plant: &Plant, plants: &[Plant], max_active: usize) -> bool {
    plant.state != PlantState::Active && active_count(plants) < max_active
}

/// The state a toggle should move `plant` to.
///
/// An active plant always goes back to `seed`. A non-active plant becomes
/// `active` only while there is room; otherwise the toggle is a no-op and
/// `None` is returned.
pub fn next_state(plant: &Plant, plants: &[Plant], max_active: usize) -> Option<PlantState> {
    match plant.state {
        PlantState::Active => Some(PlantState::Seed),
        PlantState::Seed if can_activate(plant, plants, max_active) => Some(PlantState::Active),
        PlantState::Seed => None,
    }
}
