//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::{ApplicationError, OutputService};
use crate::generation::{Artifact, CopyOutcome, WriteOutcome};

/// Output service that writes artifacts to the filesystem without ever
/// replacing an existing file
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<WriteOutcome, ApplicationError> {
        if let Some(parent) = artifact.path.parent() {
            self.ensure_directory(parent).await?;
        }

        // create_new makes the existence check and the create a single step
        let open = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&artifact.path)
            .await;

        let mut file = match open {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
            Err(e) => {
                return Err(ApplicationError::OutputError(format!(
                    "Failed to create file {}: {}",
                    artifact.path.display(),
                    e
                )));
            }
        };

        file.write_all(artifact.content.as_bytes())
            .await
            .map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to write file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

        file.flush().await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to flush file {}: {}",
                artifact.path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        if let Some(mode) = artifact.permissions {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(mode);
            fs::set_permissions(&artifact.path, permissions)
                .await
                .map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to set permissions on {}: {}",
                        artifact.path.display(),
                        e
                    ))
                })?;
        }

        Ok(WriteOutcome::Created)
    }

    async fn copy_if_absent(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<CopyOutcome, ApplicationError> {
        if fs::try_exists(destination).await? {
            return Ok(CopyOutcome::AlreadyPresent);
        }

        if let Some(parent) = destination.parent() {
            self.ensure_directory(parent).await?;
        }

        fs::copy(source, destination).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                destination.display(),
                e
            ))
        })?;

        Ok(CopyOutcome::Copied)
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    async fn exists(&self, path: &Path) -> Result<bool, ApplicationError> {
        Ok(fs::try_exists(path).await?)
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
