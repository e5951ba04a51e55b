//! Bootstrap error types.

use thiserror::Error;

/// Errors raised while completing the mapping model.
#[derive(Debug, Error)]
pub enum MappingError {
    /// An intentionally unimplemented mapping path was exercised.
    #[error("not yet implemented: {0}")]
    NotYetImplemented(#[from] ormbind_model::NotYetImplementedError),

    /// Dependent second passes form a cycle.
    #[error("cyclic dependency in derived identities: {0}")]
    CyclicDependency(String),

    /// A second pass referenced a class absent from the mapping model.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// Inconsistent binding input.
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),
}
