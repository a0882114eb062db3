use serde::Serialize;

/// Schema of a configuration item kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemType {
    /// Item type id
    pub id: String,

    /// Base item type this one extends, owned by the host model
    pub extend_item: Option<String>,

    /// Human readable description
    pub description: String,

    /// Properties in declaration order
    pub properties: Vec<Property>,

    /// Child collections in declaration order
    pub collections: Vec<Collection>,
}

/// A named property bound to a property type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub property_type_id: String,
    pub required: bool,
    pub site_specific: bool,
    pub description: String,
}

/// A named child collection with cardinality bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub name: String,
    pub item_type_id: String,
    pub min_count: usize,
    pub max_count: usize,
}

impl ItemType {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }
}
