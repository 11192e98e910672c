//! Runtime settings
//!
//! A plain value owned by whoever builds it. Two `Settings` never share state,
//! so tests need no reset step.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered key/value settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: IndexMap<String, Value>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one under the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        tracing::debug!(%key, "Setting updated");
        self.values.insert(key, value.into());
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Snapshot of every setting
    pub fn all(&self) -> IndexMap<String, Value> {
        self.values.clone()
    }

    /// Remove every setting
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no settings are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
