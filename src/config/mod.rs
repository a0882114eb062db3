//! Configuration management module
//!
//! This module handles loading and validating the schema configuration.

pub mod app_config;
pub mod validation;

pub use app_config::{LoggingConfig, NameserverConfig, SchemaConfig, SearchConfig};
pub use validation::ConfigValidator;
