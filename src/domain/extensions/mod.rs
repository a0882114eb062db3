//! Model extensions
//!
//! An extension contributes property types and item types to the host
//! model. Both lists are produced once at schema-load time and treated as
//! immutable afterwards.

pub mod dnsclient;

use crate::domain::validation::{ItemType, PropertyType};
use crate::shared::error::AppResult;

pub use dnsclient::DnsClientExtension;

/// Registration surface the host model calls at schema-load time
pub trait ModelExtension {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Property types in declaration order
    fn define_property_types(&self) -> AppResult<Vec<PropertyType>>;

    /// Item types in declaration order
    fn define_item_types(&self) -> Vec<ItemType>;
}
