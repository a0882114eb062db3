//! Domain validation module
//!
//! Property types, the validators they chain, item type descriptors, and
//! the registry that runs raw values through them.

pub mod builtin;
pub mod item_type;
pub mod property_type;
pub mod registry;
pub mod types;
pub mod validators;

pub use builtin::{IpAddressValidator, IsNotDigitValidator};
pub use item_type::{Collection, ItemType, Property};
pub use property_type::PropertyType;
pub use registry::{ItemValues, SchemaRegistry};
pub use types::{PropertyValidator, ValidationError};
pub use validators::{MaxCountValidator, MaxLengthValidator, Validator};
