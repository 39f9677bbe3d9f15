use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tag-set configuration for the markup filter.
///
/// Formatting tags wrap translatable text and are replaced by meta
/// placeholders for the translation step. Block-level tags are treated as
/// opaque atomic spans and never enter a translation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub formatting_tags: Vec<String>,
    pub block_tags: Vec<String>,
    /// Label prefixed to a placeholder id in the comment sent along with a
    /// hyperlink translation request
    pub hyperlink_label: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            formatting_tags: to_strings(&["strong", "em", "a", "strike", "sub", "sup", "span"]),
            block_tags: to_strings(&[
                "div",
                "iframe",
                "ul",
                "ol",
                "li",
                "p",
                "blockquote",
                "table",
                "tbody",
                "tr",
                "td",
                "th",
            ]),
            hyperlink_label: "Hyperlink for".to_string(),
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl FilterConfig {
    /// Load a configuration from a JSON file
    ///
    /// Missing keys fall back to the builtin defaults; unknown keys are
    /// rejected.
    ///
    /// # Errors
    /// - File not found or unreadable
    /// - Invalid JSON or unknown keys
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse JSON from '{}': {}", path.display(), e))
    }
}
