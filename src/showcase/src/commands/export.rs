use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use crate::lib::page::load_page;
use clap::Parser;
use showcase_core::workflow::export::WorkflowExport;
use std::path::{Path, PathBuf};

/// Writes a page's workflow as a downloadable JSON file.
#[derive(Parser)]
pub struct ExportOpts {
    /// The page whose workflow to export.
    slug: String,

    /// Directory to write into. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

pub fn exec(env: &dyn Environment, opts: ExportOpts) -> ShowcaseResult {
    let (page, descriptor) = load_page(env, &opts.slug)?;
    let export = WorkflowExport::new(&descriptor, &page.default_name)?;
    let out_dir = opts.out_dir.as_deref().unwrap_or(Path::new("."));

    let path = export.write_to(out_dir)?;
    slog::info!(
        env.get_logger(),
        "Exported {} ({}) to {}",
        export.file_name,
        export.mime_type,
        path.display()
    );
    Ok(())
}
