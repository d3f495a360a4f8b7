//! Error handling for configuration and shared plumbing.
//!
//! This module defines the main error type `Error` used by the `core` layer,
//! along with a convenient `Result` type alias. It uses `thiserror` and
//! implements conversions from the I/O and TOML error types.
//!
//! # Examples
//!
//! ```
//! use spigot_scaffold::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_config_creation() {
        let error = Error::config("memory must not be empty");
        assert!(matches!(error, Error::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: memory must not be empty"
        );
    }

    #[test]
    fn test_error_config_not_found_display() {
        let error = Error::ConfigNotFound(PathBuf::from("/nope/config.toml"));
        assert_eq!(error.to_string(), "Config file not found: /nope/config.toml");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_from_toml_error() {
        let toml_error = toml::from_str::<toml::Value>("memory = ").unwrap_err();
        let error: Error = toml_error.into();
        assert!(matches!(error, Error::Toml(_)));
        assert!(error.to_string().contains("TOML parsing error"));
    }
}
