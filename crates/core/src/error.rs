//! Error types for booking core domain logic

use thiserror::Error;

/// Calendar picker errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Malformed calendar callback data: {0}")]
    Decode(String),

    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Result type alias for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
