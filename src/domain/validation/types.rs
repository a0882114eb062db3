use std::hash::{Hash, Hasher};

use serde::Serialize;
use thiserror::Error;

/// A failed check on a raw property value
///
/// Two errors compare equal when their messages are equal. The property
/// name is context attached by the caller and does not take part in
/// equality.
#[derive(Error, Debug, Clone, Serialize)]
#[error("{error_message}")]
pub struct ValidationError {
    pub property_name: Option<String>,
    pub error_message: String,
}

impl ValidationError {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            property_name: None,
            error_message: error_message.into(),
        }
    }

    /// Attach the name of the property the value was supplied for
    pub fn for_property(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = Some(property_name.into());
        self
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.error_message == other.error_message
    }
}

impl Eq for ValidationError {}

impl Hash for ValidationError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error_message.hash(state);
    }
}

/// A single semantic check over a raw string value
///
/// Implementations hold only their configured bounds, so one instance can
/// be shared by any number of callers.
pub trait PropertyValidator: Send + Sync {
    fn validate(&self, value: &str) -> Option<ValidationError>;
}
