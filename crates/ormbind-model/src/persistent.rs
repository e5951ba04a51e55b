//! In-memory mapping model descriptors.
//!
//! These are the descriptors second passes resolve against: a map of class
//! identifiers to persistent-class metadata, built up during the first pass
//! and completed during second-pass processing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::order::NullOrder;

/// The second-pass context: class identifier -> persistent-class metadata.
pub type ClassMap = BTreeMap<String, PersistentClass>;

/// The in-memory descriptor of a mapped entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentClass {
    /// Entity name (unique within the mapping model).
    pub entity_name: String,
    /// Resolved table name.
    pub table_name: String,
    /// Mapped properties.
    pub properties: Vec<Property>,
}

/// A mapped property of a persistent class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Value mapping metadata.
    pub value: SimpleValue,
}

/// Value mapping metadata, mutable until binding completes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleValue {
    /// Resolved type name, absent until a binder fills it.
    pub type_name: Option<String>,
    /// Type parameters keyed by parameter name.
    pub type_params: BTreeMap<String, String>,
    /// Null ordering applied when this value is sorted on.
    pub null_order: NullOrder,
}

impl PersistentClass {
    /// Create a new persistent class descriptor.
    pub fn new(entity_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            table_name: table_name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Get a property by name.
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get a property by name, mutably.
    pub fn get_property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.name == name)
    }
}

impl Property {
    /// Create a property with untyped value metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SimpleValue::default(),
        }
    }

    /// Set the value metadata.
    pub fn with_value(mut self, value: SimpleValue) -> Self {
        self.value = value;
        self
    }
}

impl SimpleValue {
    /// Create untyped value metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolved type name.
    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = Some(type_name.into());
    }

    /// Replace the type parameters.
    pub fn set_type_params(&mut self, params: BTreeMap<String, String>) {
        self.type_params = params;
    }

    /// Set the null ordering.
    pub fn set_null_order(&mut self, order: NullOrder) {
        self.null_order = order;
    }

    /// Whether a type has been resolved for this value.
    pub fn is_typed(&self) -> bool {
        self.type_name.is_some()
    }
}
