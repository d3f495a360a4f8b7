//! Core types for the generation domain

use std::fmt;
use std::path::PathBuf;

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Option<u32>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: None,
        }
    }

    /// Set Unix permissions applied after the file is created
    pub fn with_permissions(mut self, mode: u32) -> Self {
        self.permissions = Some(mode);
        self
    }
}

/// What happened when an artifact was handed to the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// The destination already existed and was left untouched
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Created => write!(f, "created"),
            WriteOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// What happened when a binary was copied into place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    AlreadyPresent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_creation() {
        let artifact = Artifact::new("start.sh", "#!/bin/sh\n").with_permissions(0o755);

        assert_eq!(artifact.path, PathBuf::from("start.sh"));
        assert_eq!(artifact.content, "#!/bin/sh\n");
        assert_eq!(artifact.permissions, Some(0o755));
    }

    #[test]
    fn test_artifact_defaults_to_no_permissions() {
        let artifact = Artifact::new("eula.txt", "eula=true");
        assert_eq!(artifact.permissions, None);
    }

    #[test]
    fn test_write_outcome_display() {
        assert_eq!(WriteOutcome::Created.to_string(), "created");
        assert_eq!(WriteOutcome::Skipped.to_string(), "skipped");
    }
}
