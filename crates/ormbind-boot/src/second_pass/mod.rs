//! Second passes: deferred mapping-resolution work.
//!
//! A second pass is a unit of work that cannot run during the first pass
//! because it depends on information not yet collected, such as
//! cross-references between entities. Passes are queued on the
//! [`SecondPassCollector`] and executed against the completed class map.

mod collector;
mod set_simple_value_type;

pub use collector::SecondPassCollector;
pub use set_simple_value_type::SetSimpleValueTypeSecondPass;

use ormbind_model::ClassMap;

use crate::error::MappingError;

/// A deferred unit of mapping-resolution work.
pub trait SecondPass {
    /// Execute against the current mapping model.
    fn do_second_pass(&mut self, classes: &mut ClassMap) -> Result<(), MappingError>;
}

/// A second pass whose execution order depends on other passes.
///
/// The collector sorts dependent passes so that a pass runs after every
/// pass it is dependent upon. Implementations must keep the predicate
/// asymmetric: if `a.dependent_upon(b)` then `b.dependent_upon(a)` must be
/// false, or sorting will report a cycle.
pub trait DependentSecondPass: SecondPass {
    /// A stable identifier for diagnostics and self-comparison.
    fn pass_id(&self) -> &str;

    /// Whether this pass must run after `other`.
    fn dependent_upon(&self, other: &dyn DependentSecondPass) -> bool;
}
