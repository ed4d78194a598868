use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use crate::lib::reporter::LogReporter;
use clap::Parser;
use showcase_core::config::page::DEFAULT_WORKFLOW_NAME;
use showcase_core::workflow::{extract_description, load_workflow, StickyNoteRule};
use std::path::PathBuf;

/// Prints the sticky-note description of any workflow file.
#[derive(Parser)]
pub struct DescribeOpts {
    /// Path to an n8n workflow JSON file.
    file: PathBuf,

    /// How to recognise the sticky note.
    #[arg(long, value_enum, default_value_t = StickyNoteRule::Type)]
    rule: StickyNoteRule,
}

/// The workflow's name and its description under the chosen rule.
fn describe(env: &dyn Environment, opts: &DescribeOpts) -> (String, String) {
    let reporter = LogReporter::new(env.get_logger());
    let descriptor = load_workflow(&opts.file, DEFAULT_WORKFLOW_NAME, &reporter);

    (
        descriptor.name(DEFAULT_WORKFLOW_NAME).to_string(),
        extract_description(&descriptor, opts.rule),
    )
}

pub fn exec(env: &dyn Environment, opts: DescribeOpts) -> ShowcaseResult {
    let (name, description) = describe(env, &opts);
    println!("{}", name);
    println!("{}", description);
    Ok(())
}
