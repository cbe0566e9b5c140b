use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is malformed: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("No transaction with id: {0}")]
    NotFound(String),

    #[error("Invalid amount: {0} (must be a non-negative number)")]
    InvalidAmount(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
