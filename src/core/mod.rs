//! Shared configuration and error plumbing.

pub mod config;
pub mod error;

pub use config::ScaffoldConfig;
pub use error::Error;
