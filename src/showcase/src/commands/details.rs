use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use crate::lib::page::load_page;
use anyhow::Context;
use clap::Parser;
use showcase_core::workflow::details::{render_details, write_details};
use std::path::PathBuf;

/// Summarizes a page's workflow as `Name:` and `Description:` lines.
#[derive(Parser)]
pub struct DetailsOpts {
    /// The page whose workflow to summarize.
    slug: String,

    /// Write the summary to this file instead of stdout.
    #[arg(long)]
    outfile: Option<PathBuf>,
}

pub fn exec(env: &dyn Environment, opts: DetailsOpts) -> ShowcaseResult {
    let (_, descriptor) = load_page(env, &opts.slug)?;

    if let Some(outfile) = opts.outfile {
        write_details(&descriptor, &outfile)
            .with_context(|| format!("Failed to write details for '{}'.", opts.slug))?;
        slog::info!(env.get_logger(), "Wrote {}", outfile.display());
    } else {
        println!("{}", render_details(&descriptor));
    }
    Ok(())
}
