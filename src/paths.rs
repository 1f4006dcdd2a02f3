//! Default file locations so a bare invocation finds pywal and Element.
//!
//! The palette default follows pywal's cache layout
//! (`~/.cache/wal/colors.json`); the config default matches a system-wide
//! Element install. Both are overridable from the CLI.

use std::path::{Path, PathBuf};

/// Element config patched when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/element/config.json";

/// Sibling file the pre-patch config bytes are copied to.
pub const BACKUP_FILE_NAME: &str = ".backup.config.json";

/// Return the pywal cache palette path (`~/.cache/wal/colors.json`).
#[must_use]
pub fn default_palette_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("wal").join("colors.json"))
}

/// Derive the backup path next to a target config file.
#[must_use]
pub fn backup_path(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) => dir.join(BACKUP_FILE_NAME),
        None => PathBuf::from(BACKUP_FILE_NAME),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
