pub mod journal_mapper;
pub mod plant_mapper;

pub use journal_mapper::JournalMapper;
pub use plant_mapper::PlantMapper;
