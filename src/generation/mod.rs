//! Generation domain module - turns user input into file contents
//!
//! This module holds the naming rules for Spigot plugins, the render context
//! built from those names and the configuration, and the Tera renderer that
//! produces every scaffolded file.

pub mod context;
pub mod errors;
pub mod rules;
pub mod templates;
pub mod types;

pub use context::*;
pub use errors::*;
pub use templates::*;
pub use types::*;
