//! Shared pywal-element library exports that keep the binary and tests aligned on one pipeline.

pub mod palette;
pub mod patch;
pub mod paths;
pub mod pipeline;
pub mod slot_map;
pub mod telemetry;
pub mod theme;

pub use palette::{Palette, PaletteError};
pub use patch::PatchError;
pub use pipeline::RunOptions;
pub use slot_map::{SlotMap, SlotMapError, DEFAULT_SLOT_MAP};
pub use theme::{ThemeError, ThemeRecord, THEME_NAME};
