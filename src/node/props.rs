//! Attribute mapping carried by element nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered attribute-name to attribute-value mapping.
///
/// Key presence is meaningful on its own (`data-allowed`, `data-href`), so
/// lookups distinguish "absent" from any stored value, `null` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` exists, whatever its value.
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`; `None` when absent or not a string.
    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether `key` holds exactly the string `expected`.
    #[inline]
    pub fn is(&self, key: &str, expected: &str) -> bool {
        self.get_str(key) == Some(expected)
    }

    /// Remove `key`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
