//! Interactive prompts for inputs not supplied on the command line

use anyhow::{Context, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

pub fn plugin_name(theme: &ColorfulTheme) -> Result<String> {
    let name: String = Input::with_theme(theme)
        .with_prompt("🔤 Plugin name (e.g. test1 or 'skip' to skip plugin creation)")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Plugin name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read plugin name")?;
    Ok(name.trim().to_string())
}

pub fn target_dir(theme: &ColorfulTheme) -> Result<PathBuf> {
    let dir: String = Input::with_theme(theme)
        .with_prompt("📁 Target folder for project")
        .default(".".to_string())
        .interact_text()
        .context("Failed to read target folder")?;
    Ok(PathBuf::from(dir.trim()))
}

pub fn package_name(theme: &ColorfulTheme) -> Result<String> {
    let package: String = Input::with_theme(theme)
        .with_prompt("📦 Java package name (e.g. test1.test2.test3) or 'skip'")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Package name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read package name")?;
    Ok(package.trim().to_string())
}
