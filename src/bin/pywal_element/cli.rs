//! CLI flag schema so a pywal hook invocation is explicit and scriptable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pywal_element::paths::{default_palette_path, DEFAULT_CONFIG_PATH};
use pywal_element::pipeline::RunOptions;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "pywal-element",
    about = "Inject the current pywal palette into Element's config as a custom theme",
    version
)]
pub(crate) struct Cli {
    /// Pywal palette file (defaults to ~/.cache/wal/colors.json)
    #[arg(long = "palette", short = 'p', env = "PYWAL_ELEMENT_PALETTE")]
    pub(crate) palette: Option<PathBuf>,

    /// Element config file to patch
    #[arg(
        long = "config",
        short = 'c',
        env = "PYWAL_ELEMENT_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub(crate) config: PathBuf,

    /// JSON file overriding the built-in property-to-slot mapping
    #[arg(long = "map", short = 'm')]
    pub(crate) map: Option<PathBuf>,

    /// Mark the generated theme as dark (the default)
    #[arg(long = "dark", short = 'd', conflicts_with = "light")]
    pub(crate) dark: bool,

    /// Mark the generated theme as light
    #[arg(long = "light", short = 'l')]
    pub(crate) light: bool,

    /// Print the patched document to stdout and write nothing
    #[arg(long = "dry-run", short = 'n')]
    pub(crate) dry_run: bool,

    /// Log progress to stderr
    #[arg(long = "verbose", short = 'v')]
    pub(crate) verbose: bool,
}

impl Cli {
    /// Resolve flags into pipeline inputs, filling in the palette default.
    pub(crate) fn into_run_options(self) -> Result<RunOptions> {
        let palette_path = match self.palette {
            Some(path) => path,
            None => default_palette_path()
                .context("could not determine the pywal cache directory; pass --palette")?,
        };
        Ok(RunOptions {
            palette_path,
            config_path: self.config,
            map_path: self.map,
            is_dark: self.dark || !self.light,
            dry_run: self.dry_run,
        })
    }
}
