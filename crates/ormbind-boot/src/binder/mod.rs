//! Value binders.
//!
//! A binder gathers mapping input during the first pass and fills value
//! metadata when its deferred second pass runs.

mod simple_value;

pub use simple_value::SimpleValueBinder;

use crate::error::MappingError;

/// A collaborator that fills value mapping metadata.
pub trait ValueBinder {
    /// Fill the owned value's metadata from the gathered binding input.
    fn fill_simple_value(&mut self) -> Result<(), MappingError>;
}
