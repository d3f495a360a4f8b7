//! Business rules for plugin names, package names and project layout

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

use crate::generation::GenerationError;

/// Input that disables plugin scaffolding when given as plugin or package name
pub const SKIP_SENTINEL: &str = "skip";

/// Project directory name used when plugin creation is skipped
pub const FALLBACK_PROJECT_DIR: &str = "project";

static JAVA_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// True for the `skip` sentinel, in any letter case
pub fn is_skip(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(SKIP_SENTINEL)
}

/// Derive the plugin's main class name by dropping every dash
pub fn main_class_name(plugin_name: &str) -> String {
    plugin_name.replace('-', "")
}

/// Source directory for `package_name` relative to the project root
pub fn java_source_dir(package_name: &str) -> PathBuf {
    package_name
        .split('.')
        .fold(PathBuf::from("src/main/java"), |dir, segment| dir.join(segment))
}

/// Check that a string is a usable Java identifier
pub fn is_java_identifier(name: &str) -> bool {
    JAVA_IDENTIFIER.is_match(name) && !JAVA_KEYWORDS.contains(&name)
}

/// Validates plugin name format and the main class derived from it
pub fn validate_plugin_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::ValidationError(
            "Plugin name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(GenerationError::ValidationError(
            "Plugin name must contain only alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err(GenerationError::ValidationError(
            "Plugin name cannot start with a dash or underscore".to_string(),
        ));
    }

    let main_class = main_class_name(name);
    if !is_java_identifier(&main_class) {
        return Err(GenerationError::ValidationError(format!(
            "Main class '{main_class}' derived from plugin name is not a valid Java identifier"
        )));
    }

    Ok(())
}

/// Validates a dot-separated Java package name
pub fn validate_package_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::ValidationError(
            "Package name cannot be empty".to_string(),
        ));
    }

    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(GenerationError::ValidationError(format!(
                "Package name '{name}' contains an empty segment"
            )));
        }
        if !is_java_identifier(segment) {
            return Err(GenerationError::ValidationError(format!(
                "Package segment '{segment}' is not a valid Java identifier"
            )));
        }
    }

    Ok(())
}
