//! Pywal palette parsing so wallpaper-derived colors load from the wal cache format.
//!
//! Pywal writes `~/.cache/wal/colors.json` with three sections:
//! - **colors**: the sixteen terminal slots (`color0`..`color15`) as hex strings
//! - **special**: background/foreground/cursor colors
//! - **wallpaper**: path of the image the palette was generated from
//!
//! Only `colors` is required; the other sections are carried for diagnostics.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors encountered while loading or validating a palette file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Io(String),
    Parse(String),
    InvalidColor { slot: String, value: String },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "JSON parse error: {msg}"),
            Self::InvalidColor { slot, value } => {
                write!(f, "palette slot `{slot}` holds invalid color `{value}`")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

// ---------------------------------------------------------------------------
// Wal cache schema (deserialization)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    wallpaper: Option<String>,
    #[serde(default)]
    special: HashMap<String, String>,
    colors: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A validated set of named color slots produced by pywal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<String, String>,
    special: HashMap<String, String>,
    wallpaper: Option<String>,
}

impl Palette {
    /// Load a palette from a wal cache file on disk.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PaletteError::Io(e.to_string()))?;
        Self::from_json_str(&raw)
    }

    /// Parse a palette from raw JSON in the wal cache format.
    ///
    /// Every entry in `colors` must be a hex color string; the first
    /// malformed entry fails the whole palette.
    pub fn from_json_str(raw: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile =
            serde_json::from_str(raw).map_err(|e| PaletteError::Parse(e.to_string()))?;
        for (slot, value) in &file.colors {
            if !is_hex_color(value) {
                return Err(PaletteError::InvalidColor {
                    slot: slot.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(Self {
            colors: file.colors,
            special: file.special,
            wallpaper: file.wallpaper,
        })
    }

    /// Look up the color string held by a slot.
    #[must_use]
    pub fn color(&self, slot: &str) -> Option<&str> {
        self.colors.get(slot).map(String::as_str)
    }

    /// Number of color slots in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Look up a `special` section color (background, foreground, cursor).
    #[must_use]
    pub fn special(&self, key: &str) -> Option<&str> {
        self.special.get(key).map(String::as_str)
    }

    /// Path of the wallpaper the palette was generated from, if recorded.
    #[must_use]
    pub fn wallpaper(&self) -> Option<&str> {
        self.wallpaper.as_deref()
    }
}

/// Check a `#`-prefixed hex color in shorthand or full form
/// (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
