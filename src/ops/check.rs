use std::collections::HashSet;

use serde::Serialize;

use crate::model::board::Board;
use crate::model::config::Catalog;

/// Structured result from `aac check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub warnings: Vec<CheckWarning>,
}

/// A board lint (the board still loads and navigates)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Category with no items
    #[serde(rename = "empty_category")]
    EmptyCategory { key: String },
    /// Home item that does not link to a category
    #[serde(rename = "loose_home_item")]
    LooseHomeItem { key: String },
    /// Catalog override naming no category on the board
    #[serde(rename = "unknown_catalog_entry")]
    UnknownCatalogEntry { name: String },
    /// Item key that is also a category key; selecting it enters the category
    #[serde(rename = "shadowed_item")]
    ShadowedItem { category: String, key: String },
}

/// Validate a board against its catalog.
///
/// Read-only. Checks performed:
/// 1. Every category has at least one item
/// 2. Home only holds category links
/// 3. Every catalog entry names an existing category
/// 4. No item key collides with a category key
pub fn check_board(board: &Board, catalog: &Catalog) -> CheckResult {
    let mut warnings = Vec::new();

    for (key, category) in &board.categories {
        if category.is_empty() {
            warnings.push(CheckWarning::EmptyCategory { key: key.clone() });
        }
        for item_key in category.keys() {
            if board.is_category(&item_key) && item_key != *key {
                warnings.push(CheckWarning::ShadowedItem {
                    category: key.clone(),
                    key: item_key,
                });
            }
        }
    }

    for key in board.home.keys() {
        if !board.is_category(&key) {
            warnings.push(CheckWarning::LooseHomeItem { key });
        }
    }

    let names: HashSet<&str> = board.categories.values().map(|c| c.name()).collect();
    for name in catalog.names() {
        if !names.contains(name) {
            warnings.push(CheckWarning::UnknownCatalogEntry {
                name: name.to_string(),
            });
        }
    }

    CheckResult {
        valid: warnings.is_empty(),
        warnings,
    }
}
