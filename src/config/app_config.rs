//! Schema configuration structures
//!
//! This module contains the configuration for logging and for the bounds the
//! DNS client schema wires into its validators and collections.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::validation::ConfigValidator;
use crate::shared::error::AppResult;
use crate::shared::logging::LoggingUtils;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[validate(length(min = 1))]
    pub level: String,

    /// Output format: "plain" or "json"
    #[validate(length(min = 1))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

/// Bounds for the comma separated search domain list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum length of the whole search value
    #[validate(range(min = 1, max = 4096))]
    pub max_length: usize,

    /// Minimum number of domains
    #[validate(range(min = 1, max = 64))]
    pub min_domains: usize,

    /// Maximum number of domains
    #[validate(range(min = 1, max = 64))]
    pub max_domains: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_length: 256,
            min_domains: 1,
            max_domains: 6,
        }
    }
}

/// Cardinality of the nameservers collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NameserverConfig {
    #[validate(range(max = 16))]
    pub min_count: usize,

    #[validate(range(min = 1, max = 16))]
    pub max_count: usize,
}

impl Default for NameserverConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_count: 3,
        }
    }
}

/// Schema configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SchemaConfig {
    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,

    /// Search domain bounds
    #[validate(nested)]
    pub search: SearchConfig,

    /// Nameserver collection bounds
    #[validate(nested)]
    pub nameservers: NameserverConfig,
}

impl SchemaConfig {
    /// Load configuration from file and environment variables
    ///
    /// Reads an optional `DnsClient.{toml,yaml,json,...}` file, then
    /// `DNSCLIENT__SECTION__KEY` environment variables.
    pub fn load() -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("DnsClient").required(false))
            .add_source(
                config::Environment::with_prefix("DNSCLIENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Load configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    /// Install the global subscriber described by the logging section
    pub fn init_logging(&self) -> AppResult<()> {
        LoggingUtils::initialize(&self.logging.level, &self.logging.format)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> AppResult<Self> {
        let config: SchemaConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        ConfigValidator::validate_config(&config)?;

        Ok(config)
    }
}
