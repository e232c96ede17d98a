use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Name given to the synthetic root category
pub const HOME_NAME: &str = "home";

/// An edit that the board file format could not represent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("key cannot be empty")]
    EmptyKey,
    #[error("key '{0}' cannot contain whitespace")]
    KeyWhitespace(String),
    #[error("category key '{0}' cannot start with '>'")]
    CategoryKeyMarker(String),
    #[error("category '{0}' needs a name")]
    EmptyName(String),
    #[error("text cannot contain line breaks")]
    LineBreak,
}

/// Keys are a single token of a board line.
pub fn validate_key(key: &str) -> Result<(), EditError> {
    if key.is_empty() {
        return Err(EditError::EmptyKey);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(EditError::KeyWhitespace(key.to_string()));
    }
    Ok(())
}

/// Names and texts run to the end of their line.
pub fn validate_text(text: &str) -> Result<(), EditError> {
    if text.contains(['\n', '\r']) {
        return Err(EditError::LineBreak);
    }
    Ok(())
}

/// The full set of categories on a board.
///
/// `home` is the synthetic root: it holds one item per top-level category
/// (category key → category name) plus any loose items declared before the
/// first category in the board file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub home: Category,
    pub categories: IndexMap<String, Category>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            home: Category::new(HOME_NAME),
            categories: IndexMap::new(),
        }
    }

    pub fn is_category(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    pub fn category_mut(&mut self, key: &str) -> Option<&mut Category> {
        self.categories.get_mut(key)
    }

    /// Register a top-level category under `key` and link it from home.
    /// Returns the category's position in `categories`.
    ///
    /// Declaring a key that already exists reopens that category: its name
    /// is updated and its items are kept. The key and name must survive a
    /// write and re-read of the board file.
    pub fn declare_category(&mut self, key: &str, name: &str) -> Result<usize, EditError> {
        validate_key(key)?;
        if key.starts_with('>') {
            return Err(EditError::CategoryKeyMarker(key.to_string()));
        }
        if name.is_empty() {
            return Err(EditError::EmptyName(key.to_string()));
        }
        validate_text(name)?;

        let entry = self.categories.entry(key.to_string());
        let index = entry.index();
        entry
            .and_modify(|existing| existing.rename(name))
            .or_insert_with(|| Category::new(name));
        self.home.add_item(key, name);
        Ok(index)
    }

    /// Remove a category and its home link. Returns the removed category.
    pub fn remove_category(&mut self, key: &str) -> Option<Category> {
        let removed = self.categories.shift_remove(key)?;
        self.home.remove_item(key);
        Some(removed)
    }

    /// Total number of items across home and all categories
    pub fn item_count(&self) -> usize {
        self.home.len() + self.categories.values().map(Category::len).sum::<usize>()
    }
}
