use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("Word not found: {0}")]
    WordNotFound(String),
    #[error("Progress not found for word: {0}")]
    ProgressNotFound(String),
    #[error("Invalid review: {0}")]
    InvalidReview(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Database error")]
    DatabaseError(DieselError),
    #[error("Connection pool error")]
    PoolError(r2d2::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
