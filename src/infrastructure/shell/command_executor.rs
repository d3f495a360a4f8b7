//! Command executor for running the external build tool
//!
//! The build command is handed to the platform shell (`sh -c` or `cmd /C`)
//! so that `mvn` resolves the same way it would in the user's terminal,
//! including `mvn.cmd` on Windows.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::generation::GenerationError;

/// Trait for executing shell commands
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a shell command in the given working directory
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandResult, GenerationError>;
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: i32,
    /// Empty when the output was streamed to the terminal
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// Check if the command was successful
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Where the child process output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Captured,
    Inherited,
}

/// Default command executor using tokio::process
pub struct ShellCommandExecutor {
    mode: OutputMode,
}

impl ShellCommandExecutor {
    /// Executor that captures stdout and stderr into the result
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Captured,
        }
    }

    /// Executor that streams the child's output straight to the terminal
    pub fn inherited() -> Self {
        Self {
            mode: OutputMode::Inherited,
        }
    }

    fn stdio(&self) -> Stdio {
        match self.mode {
            OutputMode::Captured => Stdio::piped(),
            OutputMode::Inherited => Stdio::inherit(),
        }
    }
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandResult, GenerationError> {
        let (shell, shell_arg) = if cfg!(target_os = "windows") {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        tracing::debug!(command = %command, working_dir = %working_dir.display(), "Spawning command");

        let output = Command::new(shell)
            .arg(shell_arg)
            .arg(command)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(self.stdio())
            .stderr(self.stdio())
            .output()
            .await
            .map_err(|e| {
                GenerationError::CommandError(format!(
                    "Failed to execute command '{command}': {e}"
                ))
            })?;

        Ok(CommandResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Mock command executor for testing
#[cfg(test)]
pub struct MockCommandExecutor {
    pub results: std::collections::HashMap<String, CommandResult>,
    pub calls: std::sync::Mutex<Vec<(String, std::path::PathBuf)>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            results: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(
        mut self,
        command: &str,
        exit_code: i32,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.results.insert(
            command.to_string(),
            CommandResult {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<(String, std::path::PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for MockCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandResult, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), working_dir.to_path_buf()));
        self.results.get(command).cloned().ok_or_else(|| {
            GenerationError::CommandError(format!(
                "Mock executor has no result for command: {command}"
            ))
        })
    }
}
