//! Scaffolder configuration
//!
//! Values are resolved with the precedence CLI flag > environment variable >
//! config file > built-in default. CLI overrides are applied by the binary
//! after [`ScaffoldConfig::load`] returns.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{Error, Result};

/// Directory name used under the platform config dir
pub const CONFIG_DIR_NAME: &str = "spigot-scaffold";

/// File name of the config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable pointing at the source `server.jar`
pub const SERVER_JAR_ENV: &str = "SPIGOT_SCAFFOLD_SERVER_JAR";

/// Environment variable overriding the build command
pub const BUILD_COMMAND_ENV: &str = "SPIGOT_SCAFFOLD_BUILD_COMMAND";

/// Settings shared by the plugin and server scaffolders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Pre-existing `server.jar` copied into every new server directory
    pub server_jar: Option<PathBuf>,
    /// Version of the `spigot-api` dependency written to `pom.xml`
    pub spigot_version: String,
    /// Java source/target level for the Maven compiler
    pub java_version: String,
    /// `api-version` entry of `plugin.yml`
    pub api_version: String,
    /// Heap size passed as both `-Xmx` and `-Xms` in the launch scripts
    pub memory: String,
    /// Command run in the project root once the plugin files exist
    pub build_command: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            server_jar: None,
            spigot_version: "1.8.8-R0.1-SNAPSHOT".to_string(),
            java_version: "8".to_string(),
            api_version: "1.8.8".to_string(),
            memory: "2G".to_string(),
            build_command: "mvn clean package".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Location of the per-user config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a config from TOML. Missing keys fall back to the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file and apply environment overrides.
    ///
    /// An explicit path must exist. Without one, the per-user file is read
    /// when present and the defaults are used otherwise.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !tokio::fs::try_exists(path).await? {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                Self::read_file(path).await?
            }
            None => {
                let path = Self::default_path();
                let found = match &path {
                    Some(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
                    None => false,
                };
                match path {
                    Some(path) if found => Self::read_file(&path).await?,
                    _ => {
                        debug!("No config file found, using defaults");
                        Self::default()
                    }
                }
            }
        };

        config.apply_env_with(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading config file");
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(jar) = lookup(SERVER_JAR_ENV).filter(|v| !v.trim().is_empty()) {
            self.server_jar = Some(PathBuf::from(jar.trim()));
        }
        if let Some(command) = lookup(BUILD_COMMAND_ENV).filter(|v| !v.trim().is_empty()) {
            self.build_command = command.trim().to_string();
        }
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("spigot_version", &self.spigot_version),
            ("java_version", &self.java_version),
            ("api_version", &self.api_version),
            ("memory", &self.memory),
            ("build_command", &self.build_command),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::config(format!("`{key}` must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_spigot_1_8_8() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.server_jar, None);
        assert_eq!(config.spigot_version, "1.8.8-R0.1-SNAPSHOT");
        assert_eq!(config.java_version, "8");
        assert_eq!(config.api_version, "1.8.8");
        assert_eq!(config.memory, "2G");
        assert_eq!(config.build_command, "mvn clean package");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScaffoldConfig::from_toml_str(
            r#"
server_jar = "/opt/spigot/server.jar"
memory = "4G"
"#,
        )
        .unwrap();

        assert_eq!(config.server_jar, Some(PathBuf::from("/opt/spigot/server.jar")));
        assert_eq!(config.memory, "4G");
        assert_eq!(config.java_version, "8");
    }

    #[test]
    fn test_empty_value_is_rejected() {
        let err = ScaffoldConfig::from_toml_str("memory = \"  \"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("memory"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = ScaffoldConfig::from_toml_str("memory = [").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (SERVER_JAR_ENV, "/srv/server.jar"),
            (BUILD_COMMAND_ENV, "mvn -q package"),
        ]);
        let mut config = ScaffoldConfig::default();
        config.apply_env_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server_jar, Some(PathBuf::from("/srv/server.jar")));
        assert_eq!(config.build_command, "mvn -q package");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = ScaffoldConfig::default();
        config.apply_env_with(|_| Some("   ".to_string()));
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[tokio::test]
    async fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "java_version = \"17\"\n").unwrap();

        let config = ScaffoldConfig::load(Some(path.as_path())).await.unwrap();
        assert_eq!(config.java_version, "17");
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = ScaffoldConfig::load(Some(path.as_path())).await.unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(p) if p == path));
    }
}
