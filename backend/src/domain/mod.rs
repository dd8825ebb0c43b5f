//! # Domain Module
//!
//! Business rules for the garden: planting seeds, the activation cap, and the
//! journal entries seeds grow out of.
//!
//! - **plant_service**: creating plants and moving them between `seed` and `active`
//! - **journal_service**: writing and listing journal entries
//! - **models**: records as the domain sees them, with typed timestamps
//! - **error**: the failures the services report

pub mod error;
pub mod journal_service;
pub mod models;
pub mod plant_service;

pub use error::{GardenError, GardenResult};
pub use journal_service::JournalService;
pub use plant_service::PlantService;
