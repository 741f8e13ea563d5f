//! Preference sources: the key/value stores a [`Settings`](crate::Settings)
//! snapshot is overlaid from.
//!
//! - [`PreferenceSource`] — the capability the settings layer reads through
//! - [`PrefValue`] — a single stored scalar
//! - [`MemoryPreferences`] — ordered in-memory store
//! - [`PreferenceFile`] — YAML file on disk backed by a [`MemoryPreferences`]

mod file;
mod memory;

pub use file::PreferenceFile;
pub use memory::MemoryPreferences;

use serde::{Deserialize, Serialize};

/// Typed get-with-default access to stored preferences.
///
/// A read returns `default` when the key is absent or the stored value
/// cannot be read as the requested kind. Implementations never fail.
pub trait PreferenceSource {
    fn get_string(&self, key: &str, default: &str) -> String;

    fn get_bool(&self, key: &str, default: bool) -> bool;

    fn get_i64(&self, key: &str, default: i64) -> i64;
}

/// A stored preference scalar.
///
/// Integer-valued settings are conventionally stored as text (list-style
/// settings screens write strings), but YAML numbers are accepted too.
/// Anything else (null, floats, lists, mappings) is kept as [`PrefValue::Other`]
/// and reads back as the caller's default for that key only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Str(String),
    /// Must stay last: untagged variants are tried in order.
    Other(serde_yaml_ng::Value),
}

impl PrefValue {
    /// Text form of any scalar.
    pub fn as_string(&self) -> Option<String> {
        match self {
            PrefValue::Str(s) => Some(s.clone()),
            PrefValue::Int(i) => Some(i.to_string()),
            PrefValue::Bool(b) => Some(b.to_string()),
            PrefValue::Other(_) => None,
        }
    }

    /// Booleans, or the strings `"true"` / `"false"`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            PrefValue::Str(s) => s.trim().parse().ok(),
            PrefValue::Int(_) | PrefValue::Other(_) => None,
        }
    }

    /// Integers, or strings that parse as one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PrefValue::Int(i) => Some(*i),
            PrefValue::Str(s) => s.trim().parse().ok(),
            PrefValue::Bool(_) | PrefValue::Other(_) => None,
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Int(value)
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        PrefValue::Int(value.into())
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Str(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Str(value)
    }
}
