//! Infrastructure layer - concrete implementations of application ports

pub mod output;
pub mod shell;

pub use output::*;
pub use shell::*;
