//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{GenerationError, WriteOutcome, rules};

/// The three answers that drive a scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub plugin_name: String,
    pub target_dir: PathBuf,
    pub package_name: String,
}

impl ScaffoldRequest {
    pub fn new(
        plugin_name: impl Into<String>,
        target_dir: impl Into<PathBuf>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into().trim().to_string(),
            target_dir: target_dir.into(),
            package_name: package_name.into().trim().to_string(),
        }
    }

    /// Plugin scaffolding runs unless either answer is the skip sentinel
    pub fn wants_plugin(&self) -> bool {
        !rules::is_skip(&self.plugin_name) && !rules::is_skip(&self.package_name)
    }

    /// Project root: the plugin name under the target dir, or `project`
    /// when the plugin name is the skip sentinel
    pub fn base_path(&self) -> PathBuf {
        let dir_name = if rules::is_skip(&self.plugin_name) {
            rules::FALLBACK_PROJECT_DIR
        } else {
            self.plugin_name.as_str()
        };
        self.target_dir.join(dir_name)
    }

    pub fn server_path(&self) -> PathBuf {
        self.base_path().join("server")
    }

    pub fn plugin_request(&self) -> Option<CreatePluginRequest> {
        self.wants_plugin().then(|| CreatePluginRequest {
            plugin_name: self.plugin_name.clone(),
            package_name: self.package_name.clone(),
            base_path: self.base_path(),
        })
    }
}

/// Request to scaffold the plugin sources and build descriptor
#[derive(Debug, Clone)]
pub struct CreatePluginRequest {
    pub plugin_name: String,
    pub package_name: String,
    pub base_path: PathBuf,
}

impl CreatePluginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.plugin_name.is_empty() {
            return Err(ValidationError::EmptyPluginName);
        }
        rules::validate_plugin_name(&self.plugin_name)
            .map_err(|e| ValidationError::InvalidPluginName(rule_message(e)))?;

        if self.package_name.is_empty() {
            return Err(ValidationError::EmptyPackageName);
        }
        rules::validate_package_name(&self.package_name)
            .map_err(|e| ValidationError::InvalidPackageName(rule_message(e)))?;

        Ok(())
    }
}

fn rule_message(error: GenerationError) -> String {
    match error {
        GenerationError::ValidationError(message) => message,
        other => other.to_string(),
    }
}

/// Request to set up a server runtime directory
#[derive(Debug, Clone)]
pub struct CreateServerRequest {
    pub server_path: PathBuf,
    pub source_jar: Option<PathBuf>,
}

/// Outcome of one templated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// How the external build step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    NotRun,
    Succeeded,
    Failed { exit_code: i32 },
}

/// Response from plugin scaffolding
#[derive(Debug, Clone)]
pub struct PluginReport {
    pub main_class: String,
    pub plugins_dir: PathBuf,
    pub files: Vec<FileReport>,
    pub build: BuildStatus,
}

/// What happened to `server.jar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JarStatus {
    Copied,
    AlreadyPresent,
    SourceMissing(PathBuf),
    NotConfigured,
}

/// Response from server scaffolding
#[derive(Debug, Clone)]
pub struct ServerReport {
    pub server_path: PathBuf,
    pub jar: JarStatus,
    pub files: Vec<FileReport>,
}

impl ServerReport {
    /// False when the run stopped because no source jar was available
    pub fn is_complete(&self) -> bool {
        matches!(self.jar, JarStatus::Copied | JarStatus::AlreadyPresent)
    }
}

/// Response from a full run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub base_path: PathBuf,
    pub plugin: Option<PluginReport>,
    pub server: ServerReport,
}

impl ScaffoldReport {
    /// Every templated file touched by the run, plugin first
    pub fn files(&self) -> impl Iterator<Item = &FileReport> {
        self.plugin
            .iter()
            .flat_map(|p| p.files.iter())
            .chain(self.server.files.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_uses_plugin_name() {
        let request = ScaffoldRequest::new("test1", "/work", "com.example");
        assert!(request.wants_plugin());
        assert_eq!(request.base_path(), PathBuf::from("/work/test1"));
        assert_eq!(request.server_path(), PathBuf::from("/work/test1/server"));
    }

    #[test]
    fn test_skip_plugin_name_falls_back_to_project_dir() {
        let request = ScaffoldRequest::new("SKIP", "/work", "com.example");
        assert!(!request.wants_plugin());
        assert_eq!(request.base_path(), PathBuf::from("/work/project"));
        assert!(request.plugin_request().is_none());
    }

    #[test]
    fn test_skip_package_keeps_plugin_dir() {
        let request = ScaffoldRequest::new("test1", "/work", "skip");
        assert!(!request.wants_plugin());
        assert_eq!(request.base_path(), PathBuf::from("/work/test1"));
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let request = ScaffoldRequest::new("  test1 ", "/work", " com.example\n");
        assert_eq!(request.plugin_name, "test1");
        assert_eq!(request.package_name, "com.example");
    }

    #[test]
    fn test_create_plugin_request_validation() {
        let valid = ScaffoldRequest::new("my-plugin", "/work", "com.example")
            .plugin_request()
            .unwrap();
        assert!(valid.validate().is_ok());

        let mut invalid = valid.clone();
        invalid.plugin_name = String::new();
        assert!(matches!(
            invalid.validate().unwrap_err(),
            ValidationError::EmptyPluginName
        ));

        let mut invalid = valid.clone();
        invalid.plugin_name = "bad name!".to_string();
        assert!(matches!(
            invalid.validate().unwrap_err(),
            ValidationError::InvalidPluginName(_)
        ));

        let mut invalid = valid.clone();
        invalid.package_name = String::new();
        assert!(matches!(
            invalid.validate().unwrap_err(),
            ValidationError::EmptyPackageName
        ));

        let mut invalid = valid;
        invalid.package_name = "com..example".to_string();
        assert!(matches!(
            invalid.validate().unwrap_err(),
            ValidationError::InvalidPackageName(_)
        ));
    }

    #[test]
    fn test_validation_message_is_not_nested() {
        let request = ScaffoldRequest::new("my plugin", "/work", "com.example")
            .plugin_request()
            .unwrap();

        let message = request.validate().unwrap_err().to_string();
        assert!(message.starts_with("Invalid plugin name: Plugin name must contain"));
        assert!(!message.contains("Validation error"));
    }

    #[test]
    fn test_server_report_completeness() {
        let report = ServerReport {
            server_path: PathBuf::from("server"),
            jar: JarStatus::NotConfigured,
            files: vec![],
        };
        assert!(!report.is_complete());

        let report = ServerReport {
            jar: JarStatus::AlreadyPresent,
            ..report
        };
        assert!(report.is_complete());
    }
}
