//! Second pass that delegates value typing to a binder.

use ormbind_model::ClassMap;

use super::SecondPass;
use crate::binder::ValueBinder;
use crate::error::MappingError;

/// Fills a simple value's type by delegating to its binder.
///
/// The pass owns the binder and performs exactly one fill call per
/// execution; the class map is not consulted. Binder failures propagate
/// untranslated.
#[derive(Debug)]
pub struct SetSimpleValueTypeSecondPass<B: ValueBinder> {
    binder: B,
}

impl<B: ValueBinder> SetSimpleValueTypeSecondPass<B> {
    /// Create the pass over the given binder.
    pub fn new(binder: B) -> Self {
        Self { binder }
    }

    /// The owned binder.
    pub fn binder(&self) -> &B {
        &self.binder
    }

    /// Consume the pass, yielding the binder.
    pub fn into_binder(self) -> B {
        self.binder
    }
}

impl<B: ValueBinder> SecondPass for SetSimpleValueTypeSecondPass<B> {
    fn do_second_pass(&mut self, _classes: &mut ClassMap) -> Result<(), MappingError> {
        self.binder.fill_simple_value()
    }
}
