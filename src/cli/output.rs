use serde::Serialize;

use crate::ops::check::{CheckResult, CheckWarning};
use crate::ops::navigator::Resolution;
use crate::ops::view::ViewEntry;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ViewJson {
    /// Category name, `""` at home
    pub category: String,
    pub entries: Vec<ViewEntry>,
}

#[derive(Serialize)]
pub struct SelectJson {
    pub steps: Vec<Resolution>,
    /// Category name after the last step, `""` at home
    pub category: String,
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Label for a category name, with home shown explicitly
pub fn location_label(name: &str) -> &str {
    if name.is_empty() { "home" } else { name }
}

/// Format a view as aligned `key  text` lines
pub fn format_view(name: &str, entries: &[ViewEntry]) -> Vec<String> {
    let mut lines = vec![format!("[{}]", location_label(name))];
    if entries.is_empty() {
        lines.push("  (no items)".to_string());
        return lines;
    }
    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for entry in entries {
        let marker = if entry.is_category { "+" } else { " " };
        lines.push(format!(
            "{} {:<width$}  {}",
            marker,
            entry.key,
            entry.text,
            width = width
        ));
    }
    lines
}

/// Format one selection step
pub fn format_resolution(res: &Resolution) -> String {
    match res {
        Resolution::Entered { key, name } => format!("enter    {} -> {}", key, name),
        Resolution::Spoken { key, text } => format!("speak    {} -> {}", key, text),
        Resolution::Unknown { key } => format!("unknown  {}", key),
    }
}

/// Format one check warning
pub fn format_warning(warning: &CheckWarning) -> String {
    match warning {
        CheckWarning::EmptyCategory { key } => format!("category {} has no items", key),
        CheckWarning::LooseHomeItem { key } => {
            format!("home item {} does not link to a category", key)
        }
        CheckWarning::UnknownCatalogEntry { name } => {
            format!("catalog entry {} matches no category name", name)
        }
        CheckWarning::ShadowedItem { category, key } => format!(
            "item {} in {} is also a category key and will open that category",
            key, category
        ),
    }
}

pub fn format_check(result: &CheckResult) -> Vec<String> {
    if result.valid {
        return vec!["board ok".to_string()];
    }
    let mut lines = vec!["Warnings:".to_string()];
    for w in &result.warnings {
        lines.push(format!("  {}", format_warning(w)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_view_aligns_keys() {
        let entries = vec![
            ViewEntry {
                key: "food".into(),
                text: "Food".into(),
                is_category: true,
            },
            ViewEntry {
                key: "img/yes.png".into(),
                text: "yes".into(),
                is_category: false,
            },
        ];
        let lines = format_view("", &entries);
        assert_eq!(
            lines,
            vec![
                "[home]".to_string(),
                "+ food         Food".to_string(),
                "  img/yes.png  yes".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_empty_view() {
        assert_eq!(format_view("Food", &[]), vec!["[Food]", "  (no items)"]);
    }

    #[test]
    fn test_format_resolution() {
        let res = Resolution::Spoken {
            key: "a.png".into(),
            text: "apple".into(),
        };
        assert_eq!(format_resolution(&res), "speak    a.png -> apple");
        assert_eq!(
            format_resolution(&Resolution::Unknown { key: "x".into() }),
            "unknown  x"
        );
    }
}
