//! Identity labels for graphs and nodes

use serde::{Deserialize, Serialize};

/// An opaque identity label
///
/// Serializes as a plain string. The empty name is valid and denotes an
/// anonymous graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a name from a string-like value
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The empty name used by anonymous graphs
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty (anonymous) name
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}
