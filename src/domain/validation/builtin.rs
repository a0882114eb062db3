//! Host-supplied property types and validators
//!
//! The DNS client schema refers to a digit check and an IP address property
//! type that the host model framework normally owns. These minimal versions
//! keep the schema self-contained.

use std::net::IpAddr;

use serde::Serialize;

use crate::domain::validation::property_type::PropertyType;
use crate::domain::validation::types::{PropertyValidator, ValidationError};
use crate::shared::error::AppResult;

pub const IP_ADDRESS_WITH_PREFIXLEN: &str = "ipv4_or_ipv6_address_with_prefixlen";

/// Fails when the value is made only of ASCII digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IsNotDigitValidator;

impl PropertyValidator for IsNotDigitValidator {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            return Some(ValidationError::new("Property cannot be a digit"));
        }
        None
    }
}

/// Accepts an IPv4 or IPv6 address with an optional `/prefixlen`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IpAddressValidator;

impl IpAddressValidator {
    fn is_valid(value: &str) -> bool {
        let (address, prefix) = match value.split_once('/') {
            Some((address, prefix)) => (address, Some(prefix)),
            None => (value, None),
        };

        let Ok(address) = address.parse::<IpAddr>() else {
            return false;
        };

        match prefix {
            None => true,
            Some(prefix) => {
                if !prefix.bytes().all(|b| b.is_ascii_digit())
                    || (prefix.len() > 1 && prefix.starts_with('0'))
                {
                    return false;
                }
                let max = if address.is_ipv4() { 32 } else { 128 };
                prefix.parse::<u8>().map(|p| p <= max).unwrap_or(false)
            }
        }
    }
}

impl PropertyValidator for IpAddressValidator {
    fn validate(&self, value: &str) -> Option<ValidationError> {
        if Self::is_valid(value) {
            None
        } else {
            Some(ValidationError::new(format!("Invalid IP address '{}'", value)))
        }
    }
}

/// Property types the host framework provides to every extension
pub fn builtin_property_types() -> AppResult<Vec<PropertyType>> {
    Ok(vec![PropertyType::new(
        IP_ADDRESS_WITH_PREFIXLEN,
        r"^[0-9a-fA-F:.]+(/[0-9]{1,3})?$",
    )?
    .with_validator(IpAddressValidator)])
}
