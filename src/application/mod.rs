//! Application layer - orchestrates the scaffolding use cases

pub mod commands;
mod console;
pub mod create_plugin;
pub mod create_server;
pub mod errors;
pub mod scaffold;
pub mod traits;

pub use commands::*;
pub use create_plugin::*;
pub use create_server::*;
pub use errors::*;
pub use scaffold::*;
pub use traits::*;
