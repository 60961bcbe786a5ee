//! Result type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An unnormalized result item as produced by a search engine.
///
/// Every key is optional. Engines only insert the keys they could extract,
/// consumers must not assume any of `title`, `url`, `abstract` or `rank`
/// is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a key, `None` when absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// A normalized search result.
///
/// All five fields are always populated; `url` is absolute or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultRecord {
    pub title: String,
    pub url: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub rank: i64,
    pub source: String,
}
