//! Custom error types and handling
//!
//! This module defines the application's error type, its stable error codes
//! and the process exit code each kind maps to.

use scoreboard_common::EngineError;
use scoreboard_rules::RuleError;
use serde::Serialize;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Computation errors
    #[error(transparent)]
    Engine(#[from] EngineError),

    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Storage errors
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed data: {0}")]
    Serialization(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error body printed by the CLI
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Engine(e) => e.error_code(),
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::NotFound(_) | Self::Engine(EngineError::NotFound(_)) => 3,
            Self::Engine(EngineError::Data(_)) | Self::Serialization(_) => 4,
            Self::Engine(EngineError::Configuration(_)) | Self::Configuration(_) => 5,
            Self::Io(_) | Self::Internal(_) => 1,
        }
    }

    /// Render the error as the CLI's JSON error body
    pub fn to_response(&self) -> ErrorResponse {
        // Internal details go to the log, not to the output
        let message = match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<RuleError> for AppError {
    fn from(err: RuleError) -> Self {
        AppError::InvalidInput(format!("filter: {err}"))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(anyhow::anyhow!("board computation task failed: {err}"))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_keep_their_code() {
        let err = AppError::from(EngineError::Data("bad problem".to_string()));
        assert_eq!(err.error_code(), "DATA_ERROR");
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Data error: bad problem");
    }

    #[test]
    fn test_not_found_exit_code_is_shared() {
        let engine = AppError::from(EngineError::NotFound("team".to_string()));
        let app = AppError::NotFound("contest".to_string());
        assert_eq!(engine.exit_code(), app.exit_code());
        assert_eq!(engine.error_code(), app.error_code());
    }

    #[test]
    fn test_bad_filter_is_invalid_input() {
        let err = AppError::from(RuleError::MissingArg("label".to_string()));
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.to_string(), "Invalid input: filter: filter \"label\" needs an arg");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::from(anyhow::anyhow!("secret stack"));
        let body = err.to_response();
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(!body.error.message.contains("secret"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = AppError::from(ConfigError::InvalidValue("LOG_FORMAT".to_string()));
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("LOG_FORMAT"));
    }
}
