//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, info};

use crate::shared::error::{AppError, AppResult};

/// Log formats accepted by [`LoggingUtils::initialize`]
pub const LOG_FORMATS: &[&str] = &["plain", "json"];

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format
    ///
    /// `RUST_LOG` overrides `level` when set. `format` is either `"plain"`
    /// or `"json"`.
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = match format {
            "json" => tracing::subscriber::set_global_default(builder.json().finish()),
            "plain" => tracing::subscriber::set_global_default(builder.finish()),
            other => {
                return Err(AppError::Config(format!("Unknown log format: {}", other)));
            }
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log a schema registration
    pub fn log_registration(extension: &str, property_types: usize, item_types: usize) {
        info!(
            extension = %extension,
            property_types = property_types,
            item_types = item_types,
            "Model extension registered"
        );
    }

    /// Log a rejected property value
    pub fn log_validation_failure(
        property_type: &str,
        rule: &str,
        property_name: Option<&str>,
        message: &str,
    ) {
        debug!(
            property_type = %property_type,
            rule = %rule,
            property_name = property_name,
            error = %message,
            "Property value rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_is_config_error() {
        let err = LoggingUtils::initialize("info", "xml").unwrap_err();
        assert_eq!(err, AppError::Config("Unknown log format: xml".to_string()));
    }
}
