pub mod descriptor;
pub mod details;
pub mod export;
pub mod loader;
pub mod sticky_note;

pub use descriptor::{Node, WorkflowDescriptor};
pub use loader::{load_workflow, try_load_workflow};
pub use sticky_note::{extract_description, StickyNoteRule};
