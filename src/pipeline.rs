//! One-pass file pipeline so a run either completes or leaves the target
//! untouched.
//!
//! Order matters: every input is read and the patched document fully
//! rendered before the first byte is written. The backup (exact pre-patch
//! bytes) lands before the overwrite, so a failed write always leaves a
//! manual recovery path.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::palette::Palette;
use crate::patch;
use crate::paths;
use crate::slot_map::SlotMap;
use crate::theme::ThemeRecord;

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub palette_path: PathBuf,
    pub config_path: PathBuf,
    pub map_path: Option<PathBuf>,
    pub is_dark: bool,
    pub dry_run: bool,
}

/// Run the full palette-to-config pass.
///
/// Dry runs print the patched document to stdout and write nothing.
pub fn run(opts: &RunOptions) -> Result<()> {
    let palette = Palette::load(&opts.palette_path)
        .with_context(|| format!("failed to load palette {}", opts.palette_path.display()))?;
    debug!(slots = palette.len(), wallpaper = ?palette.wallpaper(), "palette loaded");

    let slot_map = match &opts.map_path {
        Some(path) => SlotMap::load(path)
            .with_context(|| format!("failed to load slot map {}", path.display()))?,
        None => SlotMap::default(),
    };

    let theme = ThemeRecord::build(&palette, &slot_map, opts.is_dark)?;
    debug!(properties = theme.colors.len(), is_dark = theme.is_dark, "theme built");

    let original = fs::read(&opts.config_path)
        .with_context(|| format!("failed to read config {}", opts.config_path.display()))?;
    let mut document: Value = serde_json::from_slice(&original)
        .with_context(|| format!("failed to parse config {}", opts.config_path.display()))?;

    patch::apply(&mut document, &theme)?;
    let rendered = render_document(&document)?;

    if opts.dry_run {
        io::stdout()
            .write_all(&rendered)
            .context("failed to print patched config")?;
        info!("dry run, no file written");
        return Ok(());
    }

    let backup = paths::backup_path(&opts.config_path);
    fs::write(&backup, &original)
        .with_context(|| format!("failed to write backup {}", backup.display()))?;
    info!(path = %backup.display(), "backup written");

    write_config(&opts.config_path, &rendered)?;
    info!(path = %opts.config_path.display(), "config updated");
    Ok(())
}

/// Serialize the document with 4-space indentation and a trailing newline.
fn render_document(document: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(4096);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .context("failed to serialize patched config")?;
    buf.push(b'\n');
    Ok(buf)
}

fn write_config(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|err| {
        let hint = if err.kind() == io::ErrorKind::PermissionDenied {
            "; re-run with sufficient privileges"
        } else {
            ""
        };
        anyhow::Error::new(err)
            .context(format!("failed to overwrite {}{hint}", path.display()))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
