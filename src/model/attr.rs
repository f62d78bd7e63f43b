//! Attribute values for graphs, nodes, and links

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors from attribute-list construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttrError {
    #[error("alternating key/value list has odd length {0}")]
    OddLength(usize),

    #[error("alternating key/value list has a non-string key at position {0}")]
    NonStringKey(usize),
}

/// A typed scalar attribute value
///
/// Values are opaque to the model; interpretation belongs to the consumer
/// that renders the description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl AttrValue {
    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// Floats compare and hash by bit pattern so values can key hashed
// containers; NaN is self-equal under this contract.
impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::String(a), AttrValue::String(b)) => a == b,
            (AttrValue::Int(a), AttrValue::Int(b)) => a == b,
            (AttrValue::Float(a), AttrValue::Float(b)) => a.to_bits() == b.to_bits(),
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttrValue {}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttrValue::String(s) => s.hash(state),
            AttrValue::Int(i) => i.hash(state),
            AttrValue::Float(f) => f.to_bits().hash(state),
            AttrValue::Bool(b) => b.hash(state),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{}", s),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

// Convenience conversions
impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Attribute map with unique keys and last-write-wins updates
///
/// Key-ordered so two maps holding the same entries hash identically no
/// matter the insertion order.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// Build an [`AttrMap`] from a flat alternating key/value sequence
///
/// The sequence must have even length and string-valued keys. On error no
/// map is produced, so callers can guarantee all-or-nothing updates.
pub fn from_alternating(
    values: impl IntoIterator<Item = AttrValue>,
) -> Result<AttrMap, AttrError> {
    let values: Vec<AttrValue> = values.into_iter().collect();
    if values.len() % 2 != 0 {
        return Err(AttrError::OddLength(values.len()));
    }

    let mut map = AttrMap::new();
    for (i, pair) in values.chunks(2).enumerate() {
        match &pair[0] {
            AttrValue::String(key) => {
                map.insert(key.clone(), pair[1].clone());
            }
            _ => return Err(AttrError::NonStringKey(i * 2)),
        }
    }
    Ok(map)
}
