use regex::Regex;

use crate::domain::validation::types::{PropertyValidator, ValidationError};
use crate::domain::validation::validators::Validator;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// A named rule a raw property value must satisfy
///
/// The regex decides syntax and is always matched against the whole value.
/// Validators run afterwards in declaration order and the first error wins.
#[derive(Debug, Clone)]
pub struct PropertyType {
    id: String,
    pattern: String,
    regex: Regex,
    validators: Vec<Validator>,
}

impl PropertyType {
    /// Compile a property type with no validators
    pub fn new(id: impl Into<String>, pattern: impl Into<String>) -> AppResult<Self> {
        let id = id.into();
        let pattern = pattern.into();

        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            AppError::Schema(format!("Invalid regex for property type {}: {}", id, e))
        })?;

        Ok(Self {
            id,
            pattern,
            regex,
            validators: Vec::new(),
        })
    }

    /// Append a validator to the chain
    pub fn with_validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validators.push(validator.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The pattern as declared, without the implicit anchors
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Whether the value is syntactically acceptable
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Validate a value supplied for the named property
    pub fn validate_property(&self, property_name: &str, value: &str) -> Option<ValidationError> {
        let (rule, error) = self.check(value)?;
        let error = error.for_property(property_name);
        LoggingUtils::log_validation_failure(&self.id, rule, Some(property_name), &error.error_message);
        Some(error)
    }

    /// First failing rule and its error; the regex reports as "pattern"
    fn check(&self, value: &str) -> Option<(&'static str, ValidationError)> {
        if !self.is_match(value) {
            return Some(("pattern", ValidationError::new(format!("Invalid value '{}'.", value))));
        }

        self.validators
            .iter()
            .find_map(|validator| validator.validate(value).map(|error| (validator.name(), error)))
    }
}

impl PropertyValidator for PropertyType {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        let (rule, error) = self.check(value)?;
        LoggingUtils::log_validation_failure(&self.id, rule, None, &error.error_message);
        Some(error)
    }
}
