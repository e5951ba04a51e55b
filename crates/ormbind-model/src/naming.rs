//! Object naming contracts.
//!
//! Mapping sources expose both the name a user wrote (if any) and the name
//! the naming rules would derive; downstream resolution picks between them.

/// A source of a database object name.
pub trait ObjectNameSource {
    /// The name explicitly supplied by the user, if any.
    fn explicit_name(&self) -> Option<&str>;

    /// The logical name derived by the naming rules.
    fn logical_name(&self) -> &str;
}

/// Resolve the final object name from a source.
///
/// A present, non-empty explicit name wins; otherwise the logical name is
/// used.
pub fn resolved_name(source: &dyn ObjectNameSource) -> &str {
    match source.explicit_name() {
        Some(name) if !name.is_empty() => name,
        _ => source.logical_name(),
    }
}

/// Name source for a mapped table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNameSource {
    explicit: Option<String>,
    logical: String,
}

impl TableNameSource {
    /// Create a source carrying an explicit user-supplied name.
    pub fn explicit(explicit: impl Into<String>, logical: impl Into<String>) -> Self {
        Self {
            explicit: Some(explicit.into()),
            logical: logical.into(),
        }
    }

    /// Create a source with only a derived logical name.
    pub fn implicit(logical: impl Into<String>) -> Self {
        Self {
            explicit: None,
            logical: logical.into(),
        }
    }
}

impl ObjectNameSource for TableNameSource {
    fn explicit_name(&self) -> Option<&str> {
        self.explicit.as_deref()
    }

    fn logical_name(&self) -> &str {
        &self.logical
    }
}
