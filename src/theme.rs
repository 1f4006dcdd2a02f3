//! Theme record construction so a palette and a slot map collapse into one
//! Element custom theme.
//!
//! `build` is a pure transformation: each mapped property resolves through
//! the palette, in slot-map order, and the result is never mutated afterward.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::palette::Palette;
use crate::slot_map::SlotMap;

/// Reserved name under which the generated theme is stored in Element's
/// `custom_themes` list. Patching replaces any prior entry with this name.
pub const THEME_NAME: &str = "pywal-element";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors encountered while building a theme record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    MissingColorSlot { property: String, slot: String },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColorSlot { property, slot } => write!(
                f,
                "theme property `{property}` references palette slot `{slot}`, \
                 which is missing from the palette"
            ),
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// ThemeRecord
// ---------------------------------------------------------------------------

/// A finished Element custom theme, ready to be inserted into the config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRecord {
    pub name: String,
    pub is_dark: bool,
    pub colors: Map<String, Value>,
}

impl ThemeRecord {
    /// Resolve every slot-map entry against the palette.
    ///
    /// Fails on the first mapped slot the palette does not provide. The
    /// `colors` mapping keeps the slot map's iteration order.
    pub fn build(palette: &Palette, map: &SlotMap, is_dark: bool) -> Result<Self, ThemeError> {
        let mut colors = Map::with_capacity(map.len());
        for (property, slot) in map.iter() {
            let value = palette.color(slot).ok_or_else(|| ThemeError::MissingColorSlot {
                property: property.to_string(),
                slot: slot.to_string(),
            })?;
            colors.insert(property.to_string(), Value::String(value.to_string()));
        }
        Ok(Self {
            name: THEME_NAME.to_string(),
            is_dark,
            colors,
        })
    }

    /// Render the record as a JSON value with `name`, `is_dark`, `colors`
    /// field order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(3);
        object.insert("name".to_string(), Value::String(self.name.clone()));
        object.insert("is_dark".to_string(), Value::Bool(self.is_dark));
        object.insert("colors".to_string(), Value::Object(self.colors.clone()));
        Value::Object(object)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
