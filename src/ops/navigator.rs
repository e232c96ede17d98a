use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::io::board_io::{self, BoardError};
use crate::model::board::{self, Board, EditError};
use crate::model::category::Category;
use crate::parse::{ParseError, parse_board, serialize_board, serialize_view};

/// Where the navigator currently points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Home,
    /// A top-level category, by key
    Category(String),
}

/// Outcome of selecting a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Resolution {
    /// The key named a category, which is now current
    Entered { key: String, name: String },
    /// The key is an item of the current category
    Spoken { key: String, text: String },
    /// The key is neither; it is echoed back
    Unknown { key: String },
}

impl Resolution {
    /// The text to display or speak for this outcome
    pub fn text(&self) -> &str {
        match self {
            Resolution::Entered { name, .. } => name,
            Resolution::Spoken { text, .. } => text,
            Resolution::Unknown { key } => key,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Entered { name, .. } => name,
            Resolution::Spoken { text, .. } => text,
            Resolution::Unknown { key } => key,
        }
    }
}

/// Board navigation state: the full board plus the category being shown.
///
/// Navigation starts at home. Selecting a category key moves into that
/// category; selecting anything else leaves the location unchanged.
#[derive(Debug, Clone)]
pub struct Navigator {
    board: Board,
    current: Location,
    source: Option<PathBuf>,
}

impl Navigator {
    pub fn new(board: Board) -> Self {
        Navigator {
            board,
            current: Location::Home,
            source: None,
        }
    }

    /// Build a navigator from board file text.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Ok(Navigator::new(parse_board(source)?))
    }

    /// Load a board file.
    ///
    /// An unreadable or missing file is logged and yields an empty board
    /// (home only). A malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let board = board_io::read_board_or_empty(path)?;
        Ok(Navigator {
            board,
            current: Location::Home,
            source: Some(path.to_path_buf()),
        })
    }

    /// The file this board was loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn location(&self) -> &Location {
        &self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == Location::Home
    }

    pub fn is_category(&self, key: &str) -> bool {
        self.board.is_category(key)
    }

    /// The category currently shown
    pub fn current(&self) -> &Category {
        match &self.current {
            Location::Home => &self.board.home,
            Location::Category(key) => self.board.category(key).unwrap_or(&self.board.home),
        }
    }

    fn current_mut(&mut self) -> &mut Category {
        match &self.current {
            Location::Home => &mut self.board.home,
            Location::Category(key) => match self.board.categories.get_mut(key) {
                Some(category) => category,
                None => &mut self.board.home,
            },
        }
    }

    /// Name of the current category, or `""` at home.
    pub fn current_category_name(&self) -> &str {
        match self.current {
            Location::Home => "",
            Location::Category(_) => self.current().name(),
        }
    }

    /// Keys of the current category, in order
    pub fn visible_keys(&self) -> Vec<String> {
        self.current().keys()
    }

    /// Select `key`: enter it if it is a category, otherwise look it up in
    /// the current category. Unknown keys are echoed back.
    pub fn select(&mut self, key: &str) -> Resolution {
        if let Some(category) = self.board.category(key) {
            let name = category.name().to_string();
            debug!(key, name = %name, "entering category");
            self.current = Location::Category(key.to_string());
            return Resolution::Entered {
                key: key.to_string(),
                name,
            };
        }

        match self.current().text(key) {
            Ok(text) => {
                debug!(key, category = self.current_category_name(), "item found");
                Resolution::Spoken {
                    key: key.to_string(),
                    text: text.to_string(),
                }
            }
            Err(e) => {
                debug!(category = self.current_category_name(), "{}", e);
                Resolution::Unknown {
                    key: key.to_string(),
                }
            }
        }
    }

    /// Select `key` and return the text to show.
    pub fn resolve(&mut self, key: &str) -> String {
        self.select(key).into_text()
    }

    /// The text `resolve` would return for `key`, without navigating.
    pub fn describe<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(category) = self.board.category(key) {
            return category.name();
        }
        self.current().text(key).unwrap_or(key)
    }

    /// Go back to home
    pub fn reset(&mut self) {
        if !self.is_home() {
            debug!("reset to home");
        }
        self.current = Location::Home;
    }

    /// Add an item to the current category.
    ///
    /// At home a category key renames that category, since its home entry
    /// is written out as the category line.
    pub fn add(&mut self, key: &str, text: &str) -> Result<(), EditError> {
        if self.is_home() && self.board.is_category(key) {
            debug!(key, name = text, "renaming category from home");
            return self.add_category(key, text);
        }
        board::validate_key(key)?;
        board::validate_text(text)?;
        self.current_mut().add_item(key, text);
        Ok(())
    }

    /// Declare a top-level category. The location does not change.
    pub fn add_category(&mut self, key: &str, name: &str) -> Result<(), EditError> {
        self.board.declare_category(key, name)?;
        Ok(())
    }

    /// Remove `key` from the current category.
    ///
    /// At home a category key removes the whole category.
    pub fn remove_item(&mut self, key: &str) -> bool {
        if self.is_home() && self.board.is_category(key) {
            return self.remove_category(key);
        }
        self.current_mut().remove_item(key).is_some()
    }

    /// Remove a category. If it is the current one, navigation falls back
    /// to home.
    pub fn remove_category(&mut self, key: &str) -> bool {
        if self.board.remove_category(key).is_none() {
            return false;
        }
        if self.current == Location::Category(key.to_string()) {
            debug!(key, "removed current category, back to home");
            self.current = Location::Home;
        }
        true
    }

    /// Serialized form of the current view
    pub fn current_view_text(&self) -> String {
        serialize_view(&self.board, self.current(), &self.visible_keys())
    }

    /// Serialized form of the whole board
    pub fn full_board_text(&self) -> String {
        serialize_board(&self.board)
    }

    /// Write the keys currently visible to `path`.
    pub fn save_current_view(&self, path: impl AsRef<Path>) -> Result<(), BoardError> {
        board_io::write_board_text(path.as_ref(), &self.current_view_text())
    }

    /// Write the whole board to `path` in a form `load` reads back.
    pub fn save_full_board(&self, path: impl AsRef<Path>) -> Result<(), BoardError> {
        board_io::write_board_text(path.as_ref(), &self.full_board_text())
    }

    /// Same as [`Navigator::save_current_view`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BoardError> {
        self.save_current_view(path)
    }
}
