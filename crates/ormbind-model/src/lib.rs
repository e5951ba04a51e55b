//! ORMBIND Model - Mapping-configuration metadata types.
//!
//! This crate provides the shared metadata vocabulary for the ormbind
//! bootstrap: setting descriptors with stability tags, null-ordering,
//! object naming contracts, and the in-memory mapping model that second
//! passes resolve against.

pub mod error;
pub mod naming;
pub mod order;
pub mod persistent;
pub mod settings;

pub use error::NotYetImplementedError;
pub use naming::{resolved_name, ObjectNameSource, TableNameSource};
pub use order::NullOrder;
pub use persistent::{ClassMap, PersistentClass, Property, SimpleValue};
pub use settings::{SettingDef, SettingsRegistry, StabilityTag};
