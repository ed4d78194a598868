use crate::error::fs::{EnsureDirExistsError, WriteFileError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowExportError {
    #[error("Failed to serialize workflow '{0}'")]
    SerializeFailed(String, #[source] serde_json::Error),

    #[error("Export file name '{0}' is not a plain file name")]
    InvalidFileName(String),

    #[error(transparent)]
    EnsureOutputDir(#[from] EnsureDirExistsError),

    #[error(transparent)]
    WriteFailed(#[from] WriteFileError),
}
