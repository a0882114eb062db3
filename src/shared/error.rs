//! Error handling module
//!
//! This module provides centralized error handling for the crate. Rule
//! violations on property values are not errors in this sense: they are
//! reported as [`crate::domain::validation::ValidationError`] values.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid validator {validator}: {reason}")]
    InvalidValidator { validator: String, reason: String },

    #[error("Unknown property type: {id}")]
    UnknownPropertyType { id: String },

    #[error("Unknown item type: {id}")]
    UnknownItemType { id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
