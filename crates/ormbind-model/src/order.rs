//! Null ordering for generated `order by` clauses.

use serde::{Deserialize, Serialize};

/// Where null values sort relative to non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullOrder {
    /// No explicit ordering; the dialect default applies.
    #[default]
    None,
    /// Null values sort before non-null values.
    First,
    /// Null values sort after non-null values.
    Last,
}

impl NullOrder {
    /// The SQL clause fragment for this ordering, if any.
    pub fn sql_clause(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::First => Some("nulls first"),
            Self::Last => Some("nulls last"),
        }
    }

    /// Look up an ordering by its configuration name.
    ///
    /// The lookup is case-sensitive and total: any input other than the
    /// exact strings `"first"` and `"last"` maps to [`NullOrder::None`].
    /// Unrecognized values fall through silently so that stale or foreign
    /// configuration keeps parsing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First,
            "last" => Self::Last,
            _ => Self::None,
        }
    }
}
