use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lookup miss on a category's items
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key not found: {0}")]
pub struct KeyNotFound(pub String);

/// A named group of selectable items.
///
/// Items map an image location (the key) to the text spoken or displayed
/// when the item is selected. Keys keep their insertion order, so the
/// board renders the same way every time it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    items: IndexMap<String, String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            items: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or overwrite the text for `key`.
    /// An overwritten key keeps its original position.
    pub fn add_item(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.items.insert(key.into(), text.into());
    }

    /// Text associated with `key`.
    pub fn text(&self, key: &str) -> Result<&str, KeyNotFound> {
        self.items
            .get(key)
            .map(|s| s.as_str())
            .ok_or_else(|| KeyNotFound(key.to_string()))
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Snapshot of all keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Remove `key`, keeping the order of the remaining items.
    /// Returns the removed text, if any.
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.shift_remove(key)
    }

    /// Iterate `(key, text)` pairs in order
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
