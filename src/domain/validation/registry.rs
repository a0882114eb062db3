use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::extensions::ModelExtension;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

use super::builtin::builtin_property_types;
use super::item_type::ItemType;
use super::property_type::PropertyType;
use super::types::{PropertyValidator, ValidationError};

/// Raw values supplied for one item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemValues {
    pub properties: BTreeMap<String, String>,
    pub collection_counts: BTreeMap<String, usize>,
}

impl ItemValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_collection_count(mut self, name: impl Into<String>, count: usize) -> Self {
        self.collection_counts.insert(name.into(), count);
        self
    }
}

/// Schema registry holding the property and item types of loaded extensions
pub struct SchemaRegistry {
    property_types: HashMap<String, PropertyType>,
    item_types: HashMap<String, ItemType>,
}

impl SchemaRegistry {
    /// Create a registry holding only the host built-in property types
    pub fn new() -> AppResult<Self> {
        let mut registry = Self {
            property_types: HashMap::new(),
            item_types: HashMap::new(),
        };

        for property_type in builtin_property_types()? {
            registry
                .property_types
                .insert(property_type.id().to_string(), property_type);
        }

        Ok(registry)
    }

    /// Load an extension's definitions
    ///
    /// Nothing is registered unless every id is new and every property and
    /// collection reference resolves.
    pub fn register_extension(&mut self, extension: &dyn ModelExtension) -> AppResult<()> {
        let property_types = extension.define_property_types()?;
        let item_types = extension.define_item_types();

        let mut new_property_ids = HashSet::new();
        for property_type in &property_types {
            let id = property_type.id();
            if self.property_types.contains_key(id) || !new_property_ids.insert(id) {
                return Err(AppError::Schema(format!("Duplicate property type: {}", id)));
            }
        }

        let mut new_item_ids = HashSet::new();
        for item_type in &item_types {
            if self.item_types.contains_key(&item_type.id) || !new_item_ids.insert(item_type.id.as_str()) {
                return Err(AppError::Schema(format!("Duplicate item type: {}", item_type.id)));
            }
        }

        for item_type in &item_types {
            for property in &item_type.properties {
                let id = property.property_type_id.as_str();
                if !self.property_types.contains_key(id) && !new_property_ids.contains(id) {
                    return Err(AppError::Schema(format!(
                        "Property {} of item type {} uses unknown property type {}",
                        property.name, item_type.id, id
                    )));
                }
            }

            for collection in &item_type.collections {
                let id = collection.item_type_id.as_str();
                if !self.item_types.contains_key(id) && !new_item_ids.contains(id) {
                    return Err(AppError::Schema(format!(
                        "Collection {} of item type {} uses unknown item type {}",
                        collection.name, item_type.id, id
                    )));
                }

                if collection.max_count < collection.min_count {
                    return Err(AppError::Schema(format!(
                        "Collection {} of item type {} has max_count {} below min_count {}",
                        collection.name, item_type.id, collection.max_count, collection.min_count
                    )));
                }
            }
        }

        LoggingUtils::log_registration(extension.name(), property_types.len(), item_types.len());

        for property_type in property_types {
            self.property_types
                .insert(property_type.id().to_string(), property_type);
        }
        for item_type in item_types {
            self.item_types.insert(item_type.id.clone(), item_type);
        }

        Ok(())
    }

    pub fn property_type(&self, id: &str) -> Option<&PropertyType> {
        self.property_types.get(id)
    }

    pub fn item_type(&self, id: &str) -> Option<&ItemType> {
        self.item_types.get(id)
    }

    /// Ids of all registered item types, sorted
    pub fn item_type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.item_types.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Validate a raw value against a property type
    pub fn validate_property(&self, type_id: &str, value: &str) -> AppResult<Option<ValidationError>> {
        let property_type = self.lookup_property_type(type_id)?;
        Ok(property_type.validate(value))
    }

    /// Validate the raw values of one item against its item type
    ///
    /// Returns every problem found: property errors in declaration order,
    /// then unknown names, then collection cardinality errors.
    pub fn validate_item(&self, item_type_id: &str, values: &ItemValues) -> AppResult<Vec<ValidationError>> {
        let item_type = self
            .item_types
            .get(item_type_id)
            .ok_or_else(|| AppError::UnknownItemType { id: item_type_id.to_string() })?;

        let mut errors = Vec::new();

        for property in &item_type.properties {
            match values.properties.get(&property.name) {
                Some(value) => {
                    let property_type = self.lookup_property_type(&property.property_type_id)?;
                    if let Some(error) = property_type.validate_property(&property.name, value) {
                        errors.push(error);
                    }
                }
                None if property.required => {
                    errors.push(
                        ValidationError::new(format!(
                            "ItemType \"{}\" is required to have a property with name \"{}\"",
                            item_type.id, property.name
                        ))
                        .for_property(property.name.clone()),
                    );
                }
                None => {}
            }
        }

        for name in values.properties.keys() {
            if item_type.property(name).is_none() {
                errors.push(
                    ValidationError::new(format!(
                        "\"{}\" is not an allowed property of {}",
                        name, item_type.id
                    ))
                    .for_property(name.clone()),
                );
            }
        }

        for name in values.collection_counts.keys() {
            if item_type.collection(name).is_none() {
                errors.push(
                    ValidationError::new(format!(
                        "\"{}\" is not an allowed collection of {}",
                        name, item_type.id
                    ))
                    .for_property(name.clone()),
                );
            }
        }

        for collection in &item_type.collections {
            let count = values.collection_counts.get(&collection.name).copied().unwrap_or(0);

            if count < collection.min_count {
                errors.push(
                    ValidationError::new(format!(
                        "This collection requires a minimum of {} items",
                        collection.min_count
                    ))
                    .for_property(collection.name.clone()),
                );
            } else if count > collection.max_count {
                errors.push(
                    ValidationError::new(format!(
                        "This collection is limited to a maximum of {} items",
                        collection.max_count
                    ))
                    .for_property(collection.name.clone()),
                );
            }
        }

        Ok(errors)
    }

    fn lookup_property_type(&self, id: &str) -> AppResult<&PropertyType> {
        self.property_types
            .get(id)
            .ok_or_else(|| AppError::UnknownPropertyType { id: id.to_string() })
    }
}
