use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Malformed query record: {0}")]
    MalformedRecord(String),

    #[error("Status {0} does not map to an allowed or blocked verdict")]
    InvalidVerdict(i64),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid day/night boundary: {0}")]
    InvalidBoundary(String),

    #[error("Invalid granularity: {0}")]
    InvalidGranularity(String),

    #[error("Invalid status mapping: {0}")]
    InvalidStatusMapping(String),

    #[error("Query log source not found: {0}")]
    SourceNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
