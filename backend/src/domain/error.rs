use thiserror::Error;

/// Failures surfaced by the garden services
#[derive(Debug, Error)]
pub enum GardenError {
    #[error("{0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Let's focus on {max} plants at a time")]
    ActiveLimitReached { max: usize },
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type GardenResult<T> = Result<T, GardenError>;
