use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from aac.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: BoardSection,
    #[serde(default)]
    pub log: LogConfig,
    /// Fixed image lists keyed by category name
    #[serde(default)]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSection {
    /// Board file used when `--board` is not given, relative to the config file
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default: "warn". Overridden by `AAC_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Per-category image catalog supplied by the presentation layer.
///
/// When a category has an entry here, the UI shows these image locations
/// instead of the category's own item keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn insert(&mut self, category_name: impl Into<String>, images: Vec<String>) {
        self.entries.insert(category_name.into(), images);
    }

    /// The override list for a category name, if any
    pub fn images_for(&self, category_name: &str) -> Option<&[String]> {
        self.entries.get(category_name).map(|v| v.as_slice())
    }

    /// Category names that have an override
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
