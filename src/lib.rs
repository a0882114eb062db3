//! DNS client schema - property types and validation for resolv.conf items
//!
//! This library declares the `dns-client` and `nameserver` item types, the
//! property types their fields use, and the validators that check raw
//! property values before a host model accepts them.

pub mod config;
pub mod domain;
pub mod shared;

pub use config::SchemaConfig;
pub use domain::{
    DnsClientExtension, ItemType, ItemValues, MaxCountValidator, MaxLengthValidator,
    ModelExtension, PropertyType, PropertyValidator, SchemaRegistry, ValidationError, Validator,
};
pub use shared::error::{AppError, AppResult};
pub use shared::logging::LoggingUtils;

/// Crate result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
