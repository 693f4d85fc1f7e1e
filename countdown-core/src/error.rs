use thiserror::Error;

/// Reasons a countdown cannot be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountdownError {
    #[error("no target date selected")]
    MissingDate,
    #[error("invalid target date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("target date {value:?} has no end-of-day instant in the local zone")]
    OutOfRange { value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}
