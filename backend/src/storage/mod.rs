//! # Storage Module
//!
//! SQLite persistence for plants and journal entries through `sqlx`.
//!
//! - **connection** - pool creation and schema setup
//! - **traits** - the storage interfaces the domain layer depends on
//! - **repositories** - `sqlx` implementations of those interfaces

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{JournalRepository, PlantRepository};
pub use traits::{JournalStorage, PlantStorage};
