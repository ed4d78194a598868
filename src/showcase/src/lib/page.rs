use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use crate::lib::reporter::LogReporter;
use showcase_core::config::PageConfig;
use showcase_core::workflow::{load_workflow, WorkflowDescriptor};

/// Looks up `slug` and loads its descriptor. Descriptor problems are logged
/// and replaced by a placeholder; only an unknown slug is an error.
pub fn load_page<'env>(
    env: &'env dyn Environment,
    slug: &str,
) -> ShowcaseResult<(&'env PageConfig, WorkflowDescriptor)> {
    let showcase = env.get_showcase();
    let page = showcase.page(slug)?;
    let path = showcase.descriptor_path(page);
    slog::debug!(env.get_logger(), "Loading workflow for '{}' from {}", slug, path.display());

    let reporter = LogReporter::new(env.get_logger());
    let descriptor = load_workflow(&path, &page.default_name, &reporter);
    Ok((page, descriptor))
}
