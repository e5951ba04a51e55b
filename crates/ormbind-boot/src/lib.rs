//! ORMBIND Boot - Value binding and second-pass processing.
//!
//! This crate provides the bootstrap engine that completes an in-memory
//! mapping model: binders fill value metadata, and the second-pass
//! collector runs deferred resolution work in dependency order.

pub mod binder;
pub mod cfg;
pub mod error;
pub mod second_pass;

pub use binder::{SimpleValueBinder, ValueBinder};
pub use error::MappingError;
pub use second_pass::{
    DependentSecondPass, SecondPass, SecondPassCollector, SetSimpleValueTypeSecondPass,
};

/// Re-export model types.
pub use ormbind_model as model;
