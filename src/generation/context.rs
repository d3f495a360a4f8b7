//! Render context handed to the template engine

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::core::ScaffoldConfig;
use crate::generation::rules;

/// Relative location of the server's plugin folder inside a plugin project
pub const PLUGINS_DIR: &str = "server/plugins";

/// Variables available to a template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    /// Create an empty render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the plugin source, manifest and build descriptor
    pub fn for_plugin(plugin_name: &str, package_name: &str, config: &ScaffoldConfig) -> Self {
        let mut context = Self::new();
        context.add_variable("plugin_name", JsonValue::from(plugin_name));
        context.add_variable("package_name", JsonValue::from(package_name));
        context.add_variable(
            "main_class",
            JsonValue::from(rules::main_class_name(plugin_name)),
        );
        context.add_variable("plugins_dir", JsonValue::from(PLUGINS_DIR));
        context.add_variable("spigot_version", JsonValue::from(config.spigot_version.as_str()));
        context.add_variable("java_version", JsonValue::from(config.java_version.as_str()));
        context.add_variable("api_version", JsonValue::from(config.api_version.as_str()));
        context
    }

    /// Context for the launch scripts
    pub fn for_server(config: &ScaffoldConfig) -> Self {
        let mut context = Self::new();
        context.add_variable("memory", JsonValue::from(config.memory.as_str()));
        context
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key, value);
        }
        context
    }
}
