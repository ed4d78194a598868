use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use anyhow::bail;
use clap::Parser;
use showcase_core::config::{ShowcaseManifest, MANIFEST_FILE_NAME};
use std::path::PathBuf;

/// Writes a showcase.json describing the built-in pages, to edit from there.
#[derive(Parser)]
pub struct InitOpts {
    /// Directory to create the manifest in. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Overwrite an existing manifest.
    #[arg(long)]
    force: bool,
}

pub fn exec(env: &dyn Environment, opts: InitOpts) -> ShowcaseResult {
    let dir = opts.dir.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(MANIFEST_FILE_NAME);
    if path.exists() && !opts.force {
        bail!("{} already exists. Use --force to overwrite it.", path.display());
    }

    ShowcaseManifest::builtin().save(&path)?;
    slog::info!(env.get_logger(), "Created {}", path.display());
    Ok(())
}
