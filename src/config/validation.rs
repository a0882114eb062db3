//! Configuration validation module
//!
//! Cross-field checks the `validator` derive cannot express.

use tracing_subscriber::EnvFilter;

use crate::config::SchemaConfig;
use crate::shared::error::AppError;
use crate::shared::logging::LOG_FORMATS;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &SchemaConfig) -> crate::Result<()> {
        Self::validate_logging(&config.logging)?;
        Self::validate_search(&config.search)?;
        Self::validate_nameservers(&config.nameservers)?;
        Ok(())
    }

    fn validate_logging(logging: &crate::config::app_config::LoggingConfig) -> crate::Result<()> {
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Unknown log format '{}', expected one of {:?}",
                logging.format, LOG_FORMATS
            )));
        }

        EnvFilter::try_new(&logging.level).map_err(|e| {
            AppError::Validation(format!("Invalid log level '{}': {}", logging.level, e))
        })?;

        Ok(())
    }

    fn validate_search(search: &crate::config::app_config::SearchConfig) -> crate::Result<()> {
        if search.min_domains > search.max_domains {
            return Err(AppError::Validation(format!(
                "search.min_domains ({}) cannot be greater than search.max_domains ({})",
                search.min_domains, search.max_domains
            )));
        }

        Ok(())
    }

    fn validate_nameservers(nameservers: &crate::config::app_config::NameserverConfig) -> crate::Result<()> {
        if nameservers.min_count > nameservers.max_count {
            return Err(AppError::Validation(format!(
                "nameservers.min_count ({}) cannot be greater than nameservers.max_count ({})",
                nameservers.min_count, nameservers.max_count
            )));
        }

        Ok(())
    }
}
