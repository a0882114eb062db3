//! Domain layer - schema definitions and validation rules
//!
//! This module contains the validation core and the model extensions that
//! wire it into item types. It performs no I/O.

pub mod extensions;
pub mod validation;

pub use extensions::{DnsClientExtension, ModelExtension};
pub use validation::{
    Collection, ItemType, ItemValues, MaxCountValidator, MaxLengthValidator, Property,
    PropertyType, PropertyValidator, SchemaRegistry, ValidationError, Validator,
};
