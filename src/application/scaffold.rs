//! Use case for a full run: optional plugin project, then its server

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{
    ApplicationError, CreatePluginUseCase, CreateServerRequest, CreateServerUseCase,
    OutputService, ScaffoldReport, ScaffoldRequest, console,
};
use crate::core::ScaffoldConfig;
use crate::generation::TemplateRenderer;
use crate::infrastructure::CommandExecutor;

/// Runs the plugin scaffolder (unless skipped) and always the server scaffolder
pub struct ScaffoldUseCase {
    create_plugin: CreatePluginUseCase,
    create_server: CreateServerUseCase,
    source_jar: Option<std::path::PathBuf>,
}

impl ScaffoldUseCase {
    pub fn new(
        renderer: Arc<TemplateRenderer>,
        output_service: Arc<dyn OutputService>,
        command_executor: Arc<dyn CommandExecutor>,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            source_jar: config.server_jar.clone(),
            create_plugin: CreatePluginUseCase::new(
                renderer.clone(),
                output_service.clone(),
                command_executor,
                config.clone(),
            ),
            create_server: CreateServerUseCase::new(renderer, output_service, config),
        }
    }

    /// Turn the plugin build step on or off
    pub fn with_build(mut self, run_build: bool) -> Self {
        self.create_plugin = self.create_plugin.with_build(run_build);
        self
    }

    pub async fn execute(
        &self,
        request: ScaffoldRequest,
    ) -> Result<ScaffoldReport, ApplicationError> {
        let base_path = request.base_path();
        info!(base_path = %base_path.display(), "Starting scaffold run");

        let plugin = match request.plugin_request() {
            Some(plugin_request) => match self.create_plugin.execute(plugin_request).await {
                Ok(report) => Some(report),
                Err(ApplicationError::ValidationError(error)) => {
                    warn!(%error, "Plugin request rejected");
                    console::line(format!("❌ {error}. Plugin creation aborted."));
                    None
                }
                Err(error) => return Err(error),
            },
            None => {
                console::line("⏭️  Plugin creation skipped.");
                None
            }
        };

        let server = self
            .create_server
            .execute(CreateServerRequest {
                server_path: request.server_path(),
                source_jar: self.source_jar.clone(),
            })
            .await?;

        Ok(ScaffoldReport {
            base_path,
            plugin,
            server,
        })
    }
}
