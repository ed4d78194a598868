use crate::error::fs::ReadFileError;
use std::path::PathBuf;
use thiserror::Error;

/// A non-fatal condition raised while loading a workflow descriptor.
///
/// The loader never propagates these past its boundary; they are handed to a
/// [`Reporter`](crate::report::Reporter) and the caller receives the
/// placeholder descriptor instead.
#[derive(Error, Debug)]
pub enum WorkflowLoadError {
    #[error("{} not found", .path.display())]
    MissingFile { path: PathBuf },

    // Underlying errors are carried in the message, not the source chain.
    #[error("Error parsing {}: {error}", .path.display())]
    MalformedInput {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("{}: {}", .0, .0.source)]
    Unreadable(ReadFileError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadConditionKind {
    MissingFile,
    MalformedInput,
    Unreadable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl WorkflowLoadError {
    pub fn kind(&self) -> LoadConditionKind {
        match self {
            WorkflowLoadError::MissingFile { .. } => LoadConditionKind::MissingFile,
            WorkflowLoadError::MalformedInput { .. } => LoadConditionKind::MalformedInput,
            WorkflowLoadError::Unreadable(_) => LoadConditionKind::Unreadable,
        }
    }

    /// A missing file is only a warning; anything that was found but could not
    /// be used is an error.
    pub fn severity(&self) -> Severity {
        match self {
            WorkflowLoadError::MissingFile { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
