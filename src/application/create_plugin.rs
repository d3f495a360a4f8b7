//! Use case for scaffolding a Spigot plugin project

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{
    ApplicationError, BuildStatus, CreatePluginRequest, FileReport, OutputService, PluginReport,
    console,
};
use crate::core::ScaffoldConfig;
use crate::generation::{
    Artifact, PLUGINS_DIR, RenderContext, TemplateFile, TemplateRenderer, rules,
};
use crate::infrastructure::CommandExecutor;

/// Use case for scaffolding plugin sources, manifest and `pom.xml`
pub struct CreatePluginUseCase {
    renderer: Arc<TemplateRenderer>,
    output_service: Arc<dyn OutputService>,
    command_executor: Arc<dyn CommandExecutor>,
    config: ScaffoldConfig,
    run_build: bool,
}

impl CreatePluginUseCase {
    pub fn new(
        renderer: Arc<TemplateRenderer>,
        output_service: Arc<dyn OutputService>,
        command_executor: Arc<dyn CommandExecutor>,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            renderer,
            output_service,
            command_executor,
            config,
            run_build: true,
        }
    }

    /// Turn the build step on or off
    pub fn with_build(mut self, run_build: bool) -> Self {
        self.run_build = run_build;
        self
    }

    pub async fn execute(
        &self,
        request: CreatePluginRequest,
    ) -> Result<PluginReport, ApplicationError> {
        request.validate()?;

        let base_path = &request.base_path;
        let main_class = rules::main_class_name(&request.plugin_name);
        let java_dir = base_path.join(rules::java_source_dir(&request.package_name));
        let resource_dir = base_path.join("src/main/resources");
        let plugins_dir = base_path.join(PLUGINS_DIR);

        for dir in [&java_dir, &resource_dir, &plugins_dir] {
            self.output_service.ensure_directory(dir).await?;
        }

        let context =
            RenderContext::for_plugin(&request.plugin_name, &request.package_name, &self.config);
        let targets = [
            (
                TemplateFile::MainClass,
                java_dir.join(format!("{main_class}.java")),
            ),
            (TemplateFile::PluginManifest, resource_dir.join("plugin.yml")),
            (TemplateFile::BuildDescriptor, base_path.join("pom.xml")),
        ];

        let mut files = Vec::with_capacity(targets.len());
        for (template, path) in targets {
            let content = self.renderer.render(template, &context)?;
            let outcome = self
                .output_service
                .write_artifact(&Artifact::new(&path, content))
                .await?;
            console::file_written(&path, outcome);
            files.push(FileReport { path, outcome });
        }

        let build = if self.run_build {
            console::line("📦 Plugin structure created. Building plugin with Maven...");
            self.build(base_path, &plugins_dir).await?
        } else {
            console::line("📦 Plugin structure created. Build skipped.");
            BuildStatus::NotRun
        };

        Ok(PluginReport {
            main_class,
            plugins_dir,
            files,
            build,
        })
    }

    async fn build(
        &self,
        base_path: &Path,
        plugins_dir: &Path,
    ) -> Result<BuildStatus, ApplicationError> {
        let command = &self.config.build_command;
        info!(command = %command, path = %base_path.display(), "Running build command");

        // A command that cannot be launched at all propagates to the caller
        let result = self.command_executor.execute(command, base_path).await?;

        if result.is_success() {
            console::line(format!(
                "✅ Plugin was built and is located at: {}",
                plugins_dir.display()
            ));
            Ok(BuildStatus::Succeeded)
        } else {
            warn!(
                command = %command,
                exit_code = result.exit_code,
                stderr = %result.stderr.trim(),
                "Build command failed"
            );
            console::line(format!(
                "❌ Build command '{command}' exited with code {}",
                result.exit_code
            ));
            Ok(BuildStatus::Failed {
                exit_code: result.exit_code,
            })
        }
    }
}
