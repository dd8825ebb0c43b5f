pub mod journal_repository;
pub mod plant_repository;

pub use journal_repository::JournalRepository;
pub use plant_repository::PlantRepository;

/// SQLite reads a negative LIMIT as "no limit"
pub(crate) fn sql_limit(limit: Option<u32>) -> i64 {
    limit.map(i64::from).unwrap_or(-1)
}
