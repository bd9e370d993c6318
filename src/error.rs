use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No plans in catalog")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, MatchError>;
