//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::{Artifact, CopyOutcome, WriteOutcome};

/// Service for placing scaffolded files on disk
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write one artifact unless its path already exists
    async fn write_artifact(&self, artifact: &Artifact) -> Result<WriteOutcome, ApplicationError>;

    /// Copy `source` to `destination` unless the destination already exists
    async fn copy_if_absent(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<CopyOutcome, ApplicationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;

    async fn exists(&self, path: &Path) -> Result<bool, ApplicationError>;
}
