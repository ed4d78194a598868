use crate::error::fs::CanonicalizePathError;
use crate::error::structured_file::StructuredFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadShowcaseConfigError {
    #[error("Failed to resolve showcase manifest path")]
    ResolveManifestPathFailed(#[source] CanonicalizePathError),

    #[error("Failed to determine current working dir")]
    DetermineCurrentWorkingDirFailed(#[source] std::io::Error),

    #[error("Failed to load showcase manifest")]
    LoadFromFileFailed(#[source] StructuredFileError),

    #[error("Page '{slug}' is defined more than once in {}", .path.display())]
    DuplicatePage { slug: String, path: PathBuf },
}

#[derive(Error, Debug)]
#[error("No page named '{slug}'. Known pages: {}", .known.join(", "))]
pub struct UnknownPageError {
    pub slug: String,
    pub known: Vec<String>,
}
