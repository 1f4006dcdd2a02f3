//! Config document patching so one theme entry is replaced without
//! disturbing the rest of Element's config.
//!
//! The patch is a single in-place pass: ensure the
//! `settingDefaults.custom_themes` list exists, drop every entry carrying
//! the generated theme's name, append the new record last. Unrelated
//! fields, surviving entries, and object key order are untouched.

use serde_json::{Map, Value};

use crate::theme::ThemeRecord;

/// Top-level container Element reads default settings from.
pub const SETTING_DEFAULTS_KEY: &str = "settingDefaults";

/// List of user-defined themes inside the settings container.
pub const CUSTOM_THEMES_KEY: &str = "custom_themes";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors encountered while patching a config document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    MalformedDocument(String),
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDocument(msg) => write!(f, "malformed config document: {msg}"),
        }
    }
}

impl std::error::Error for PatchError {}

fn malformed(msg: &str) -> PatchError {
    PatchError::MalformedDocument(msg.to_string())
}

// ---------------------------------------------------------------------------
// Patching
// ---------------------------------------------------------------------------

/// Merge `theme` into the document's theme list, in place.
///
/// Entries that are not objects or carry no `name` field are kept as-is;
/// only entries named like `theme` are dropped before the append.
pub fn apply(document: &mut Value, theme: &ThemeRecord) -> Result<(), PatchError> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| malformed("configuration root is not a JSON object"))?;

    let settings = root
        .entry(SETTING_DEFAULTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    let settings = settings
        .as_object_mut()
        .ok_or_else(|| malformed("`settingDefaults` is not a JSON object"))?;

    let themes = settings
        .entry(CUSTOM_THEMES_KEY)
        .or_insert_with(|| Value::Array(Vec::new()));
    let themes = themes
        .as_array_mut()
        .ok_or_else(|| malformed("`settingDefaults.custom_themes` is not a list"))?;

    themes.retain(|entry| entry.get("name").and_then(Value::as_str) != Some(theme.name.as_str()));
    themes.push(theme.to_value());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
