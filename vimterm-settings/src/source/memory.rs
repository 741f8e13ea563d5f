//! Ordered in-memory preference store.

use super::{PrefValue, PreferenceSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Preferences held in memory, keyed by preference key.
///
/// Serializes as a flat mapping, which is also the on-disk layout of
/// [`PreferenceFile`](super::PreferenceFile).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PrefValue>,
    ) -> Option<PrefValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, PrefValue::Str(value.into()));
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, PrefValue::Bool(value));
    }

    pub fn set_i64(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, PrefValue::Int(value));
    }

    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PrefValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrefValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryPreferences
where
    K: Into<String>,
    V: Into<PrefValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PreferenceSource for MemoryPreferences {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(PrefValue::as_string)
            .unwrap_or_else(|| default.to_string())
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(PrefValue::as_bool).unwrap_or(default)
    }

    fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(PrefValue::as_i64).unwrap_or(default)
    }
}
