//! pywal-element entrypoint so a wallpaper change lands in Element's config
//! in one linear pass.
//!
//! Intended to run as a pywal post-generation hook: read the wal cache,
//! build the theme, patch the Element config with a sibling backup.

mod cli;

use anyhow::Result;
use clap::Parser;
use pywal_element::{pipeline, telemetry};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let opts = cli.into_run_options()?;
    pipeline::run(&opts)
}
