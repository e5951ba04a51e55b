//! Binder for simple (single-column) value metadata.

use std::collections::BTreeMap;

use tracing::debug;

use ormbind_model::{NullOrder, SimpleValue};

use super::ValueBinder;
use crate::error::MappingError;

/// Binds a [`SimpleValue`] from input gathered during the first pass.
///
/// The binder owns its target value; `fill_simple_value` copies the explicit
/// type name and parameters onto it. An absent explicit type leaves the
/// value untyped for later resolution.
#[derive(Debug)]
pub struct SimpleValueBinder {
    property_name: String,
    explicit_type_name: Option<String>,
    type_params: BTreeMap<String, String>,
    null_order: NullOrder,
    value: SimpleValue,
}

impl SimpleValueBinder {
    /// Create a binder for the named property.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            explicit_type_name: None,
            type_params: BTreeMap::new(),
            null_order: NullOrder::None,
            value: SimpleValue::new(),
        }
    }

    /// Set the explicit type name supplied by the user.
    pub fn with_explicit_type(mut self, type_name: impl Into<String>) -> Self {
        self.explicit_type_name = Some(type_name.into());
        self
    }

    /// Add a type parameter.
    pub fn with_type_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.type_params.insert(name.into(), value.into());
        self
    }

    /// Set the null ordering to apply to the bound value.
    pub fn with_null_order(mut self, order: NullOrder) -> Self {
        self.null_order = order;
        self
    }

    /// The property this binder targets.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The bound value.
    pub fn value(&self) -> &SimpleValue {
        &self.value
    }

    /// Consume the binder, yielding the bound value.
    pub fn into_value(self) -> SimpleValue {
        self.value
    }
}

impl ValueBinder for SimpleValueBinder {
    fn fill_simple_value(&mut self) -> Result<(), MappingError> {
        debug!(property = %self.property_name, "filling simple value");

        if let Some(type_name) = &self.explicit_type_name {
            if type_name.is_empty() {
                return Err(MappingError::InvalidMapping(format!(
                    "empty explicit type name for property '{}'",
                    self.property_name
                )));
            }
            self.value.set_type_name(type_name.clone());
        }

        if !self.type_params.is_empty() {
            self.value.set_type_params(self.type_params.clone());
        }
        self.value.set_null_order(self.null_order);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_copies_explicit_type() {
        let mut binder = SimpleValueBinder::new("email")
            .with_explicit_type("string")
            .with_type_param("length", "255");

        binder.fill_simple_value().unwrap();

        let value = binder.value();
        assert_eq!(value.type_name.as_deref(), Some("string"));
        assert_eq!(value.type_params.get("length").map(String::as_str), Some("255"));
    }

    #[test]
    fn test_fill_without_explicit_type_leaves_value_untyped() {
        let mut binder = SimpleValueBinder::new("created_at");
        binder.fill_simple_value().unwrap();
        assert!(!binder.value().is_typed());
    }

    #[test]
    fn test_fill_applies_null_order() {
        let mut binder = SimpleValueBinder::new("nickname").with_null_order(NullOrder::Last);
        binder.fill_simple_value().unwrap();
        assert_eq!(binder.value().null_order, NullOrder::Last);
    }

    #[test]
    fn test_empty_explicit_type_is_rejected() {
        let mut binder = SimpleValueBinder::new("email").with_explicit_type("");
        let err = binder.fill_simple_value().unwrap_err();
        assert!(matches!(err, MappingError::InvalidMapping(_)));
    }
}
