use crate::error::workflow::WorkflowLoadError;
use crate::report::Reporter;
use crate::workflow::WorkflowDescriptor;
use serde_json::Value;
use std::path::Path;

/// Reads and parses the descriptor at `path`, returning the condition that
/// prevented it as a value.
pub fn try_load_workflow(path: &Path) -> Result<WorkflowDescriptor, WorkflowLoadError> {
    if !path.exists() {
        return Err(WorkflowLoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let content = crate::fs::read(path).map_err(WorkflowLoadError::Unreadable)?;

    serde_json::from_slice::<Value>(&content)
        .map(WorkflowDescriptor::from_value)
        .map_err(|error| WorkflowLoadError::MalformedInput {
            path: path.to_path_buf(),
            error,
        })
}

/// Loads the descriptor at `path`.
///
/// Never fails. When the file is missing, unreadable or not JSON, the
/// condition goes to `reporter` and a placeholder named `default_name` is
/// returned in place of the document.
pub fn load_workflow(
    path: &Path,
    default_name: &str,
    reporter: &dyn Reporter,
) -> WorkflowDescriptor {
    try_load_workflow(path).unwrap_or_else(|condition| {
        reporter.report(&condition);
        WorkflowDescriptor::placeholder(default_name)
    })
}
