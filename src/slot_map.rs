//! Property-to-slot mapping so Element theme fields resolve against pywal slots.
//!
//! The built-in default mirrors what Element's custom-theme schema expects;
//! an override file replaces it wholesale. Iteration order follows the file
//! (or the built-in table), which keeps the generated theme deterministic.

use std::path::Path;

use serde_json::Value;

/// Built-in mapping used when no override file is given.
pub const DEFAULT_SLOT_MAP: &[(&str, &str)] = &[
    ("accent-color", "color2"),
    ("primary-color", "color0"),
    ("warning-color", "color1"),
    ("secondary-color", "color5"),
    ("sidebar-color", "color0"),
    ("roomlist-background-color", "color0"),
    ("roomlist-text-color", "color7"),
    ("roomlist-text-secondary-color", "color4"),
    ("roomlist-highlights-color", "color3"),
    ("roomlist-separator-color", "color3"),
    ("timeline-background-color", "color0"),
    ("timeline-text-color", "color7"),
    ("timeline-text-secondary-color", "color5"),
    ("reaction-row-button-selected-bg-color", "color6"),
];

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors encountered while loading an override mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMapError {
    Io(String),
    Parse(String),
    NotAnObject,
    NonStringSlot(String),
}

impl std::fmt::Display for SlotMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "JSON parse error: {msg}"),
            Self::NotAnObject => write!(f, "mapping file is not a JSON object"),
            Self::NonStringSlot(property) => {
                write!(f, "property `{property}` maps to a non-string slot")
            }
        }
    }
}

impl std::error::Error for SlotMapError {}

// ---------------------------------------------------------------------------
// SlotMap
// ---------------------------------------------------------------------------

/// Ordered mapping from semantic theme property to palette slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMap {
    entries: Vec<(String, String)>,
}

impl Default for SlotMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SLOT_MAP
                .iter()
                .map(|(property, slot)| ((*property).to_string(), (*slot).to_string()))
                .collect(),
        }
    }
}

impl SlotMap {
    /// Load an override mapping from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, SlotMapError> {
        let raw = std::fs::read_to_string(path).map_err(|e| SlotMapError::Io(e.to_string()))?;
        Self::from_json_str(&raw)
    }

    /// Parse an override mapping from a raw JSON object string.
    ///
    /// Entry order follows the file, which `serde_json`'s `preserve_order`
    /// feature keeps intact.
    pub fn from_json_str(raw: &str) -> Result<Self, SlotMapError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SlotMapError::Parse(e.to_string()))?;
        let object = value.as_object().ok_or(SlotMapError::NotAnObject)?;

        let mut entries = Vec::with_capacity(object.len());
        for (property, slot) in object {
            let slot = slot
                .as_str()
                .ok_or_else(|| SlotMapError::NonStringSlot(property.clone()))?;
            entries.push((property.clone(), slot.to_string()));
        }
        Ok(Self { entries })
    }

    /// Iterate over (property, slot) pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, slot)| (property.as_str(), slot.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
