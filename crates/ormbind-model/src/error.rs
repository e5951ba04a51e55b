//! Model-level error types.

use thiserror::Error;

/// Default message used when no message is supplied.
const DEFAULT_MESSAGE: &str = "Not yet implemented!";

/// Signals that an intentionally unimplemented mapping path was exercised.
///
/// Constructed at the call site and propagated to the caller; never caught
/// and suppressed inside the bootstrap itself. Immutable after construction.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NotYetImplementedError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl NotYetImplementedError {
    /// Create with the default message and no cause.
    pub fn new() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            cause: None,
        }
    }

    /// Create with an explicit message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create with the default message and an underlying cause.
    pub fn with_cause(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Create with both a message and an underlying cause.
    pub fn new_with(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NotYetImplementedError {
    fn default() -> Self {
        Self::new()
    }
}
