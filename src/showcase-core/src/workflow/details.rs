use crate::error::fs::WriteFileError;
use crate::workflow::sticky_note::{extract_description, StickyNoteRule};
use crate::workflow::WorkflowDescriptor;
use std::path::Path;

pub const UNTITLED_WORKFLOW: &str = "Untitled Workflow";

/// The two-line summary written alongside a freshly pasted workflow.
pub fn render_details(descriptor: &WorkflowDescriptor) -> String {
    format!(
        "Name: {}\nDescription: {}",
        descriptor.name(UNTITLED_WORKFLOW),
        extract_description(descriptor, StickyNoteRule::Name)
    )
}

pub fn write_details(descriptor: &WorkflowDescriptor, path: &Path) -> Result<(), WriteFileError> {
    crate::fs::write(path, render_details(descriptor))
}
