//! Engine error types.

use thiserror::Error;

/// Typed failure returned by the standings, statistics and trend builders.
///
/// Every variant is recoverable from the engine's point of view: the
/// operation returns nothing and the caller decides what to do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Contest parameters cannot be used (e.g. non-positive problem count)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rows reference something impossible (e.g. problem index out of range)
    #[error("Data error: {0}")]
    Data(String),

    /// A requested entity is absent from the roster
    #[error("Not found: {0}")]
    NotFound(String),
}

impl EngineError {
    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::Configuration(_) => "CONFIGURATION_ERROR",
            EngineError::Data(_) => "DATA_ERROR",
            EngineError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;
