//! spigot-scaffold library
//!
//! Scaffolds a Spigot plugin project (main class, `plugin.yml`, `pom.xml`)
//! together with a local test server (`server.jar`, launch scripts,
//! `eula.txt`). Existing files are never overwritten, so a run can be
//! repeated safely.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
