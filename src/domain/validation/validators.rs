//! Property value validators
//!
//! Every validator inspects a raw string and yields at most one
//! [`ValidationError`]. Validators never assume the property type's regex
//! already accepted the value.

use serde::Serialize;

use crate::domain::validation::builtin::{IpAddressValidator, IsNotDigitValidator};
use crate::domain::validation::types::{PropertyValidator, ValidationError};
use crate::shared::error::{AppError, AppResult};

/// Rejects values longer than `max_length` characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxLengthValidator {
    max_length: usize,
}

impl MaxLengthValidator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl PropertyValidator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        if value.chars().count() > self.max_length {
            return Some(ValidationError::new(format!(
                "Length of property cannot be more than {} characters",
                self.max_length
            )));
        }
        None
    }
}

/// Bounds the number of `delimiter` separated elements in a value
///
/// Splitting keeps empty elements, so `"a,,b"` holds three elements and the
/// empty string holds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxCountValidator {
    min_count: usize,
    max_count: usize,
    delimiter: String,
}

impl MaxCountValidator {
    pub fn new(min_count: usize, max_count: usize, delimiter: impl Into<String>) -> AppResult<Self> {
        let delimiter = delimiter.into();

        if max_count < min_count {
            return Err(AppError::InvalidValidator {
                validator: "MaxCountValidator".to_string(),
                reason: format!("max_count {} is less than min_count {}", max_count, min_count),
            });
        }

        if delimiter.is_empty() {
            return Err(AppError::InvalidValidator {
                validator: "MaxCountValidator".to_string(),
                reason: "delimiter cannot be empty".to_string(),
            });
        }

        Ok(Self { min_count, max_count, delimiter })
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl PropertyValidator for MaxCountValidator {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        let count = value.split(self.delimiter.as_str()).count();

        // The lower bound wins when both could apply.
        if count < self.min_count {
            // "minium" is part of the message consumers match on.
            return Some(ValidationError::new(format!(
                "A minium of {} domains per search may be specified",
                self.min_count
            )));
        }

        if count > self.max_count {
            return Some(ValidationError::new(format!(
                "A maximum of {} domains per search may be specified",
                self.max_count
            )));
        }

        None
    }
}

/// The closed set of validators a property type can chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Validator {
    IsNotDigit(IsNotDigitValidator),
    MaxLength(MaxLengthValidator),
    MaxCount(MaxCountValidator),
    IpAddress(IpAddressValidator),
}

impl Validator {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Validator::IsNotDigit(_) => "IsNotDigitValidator",
            Validator::MaxLength(_) => "MaxLengthValidator",
            Validator::MaxCount(_) => "MaxCountValidator",
            Validator::IpAddress(_) => "IpAddressValidator",
        }
    }
}

impl PropertyValidator for Validator {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        match self {
            Validator::IsNotDigit(v) => v.validate(value),
            Validator::MaxLength(v) => v.validate(value),
            Validator::MaxCount(v) => v.validate(value),
            Validator::IpAddress(v) => v.validate(value),
        }
    }
}

impl From<IsNotDigitValidator> for Validator {
    fn from(v: IsNotDigitValidator) -> Self {
        Validator::IsNotDigit(v)
    }
}

impl From<MaxLengthValidator> for Validator {
    fn from(v: MaxLengthValidator) -> Self {
        Validator::MaxLength(v)
    }
}

impl From<MaxCountValidator> for Validator {
    fn from(v: MaxCountValidator) -> Self {
        Validator::MaxCount(v)
    }
}

impl From<IpAddressValidator> for Validator {
    fn from(v: IpAddressValidator) -> Self {
        Validator::IpAddress(v)
    }
}
