//! Use case for setting up a server runtime directory

use std::sync::Arc;
use tracing::{error, info};

use crate::application::{
    ApplicationError, CreateServerRequest, FileReport, JarStatus, OutputService, ServerReport,
    console,
};
use crate::core::ScaffoldConfig;
use crate::generation::{Artifact, CopyOutcome, RenderContext, TemplateFile, TemplateRenderer};

const SERVER_JAR: &str = "server.jar";

/// Use case for copying `server.jar` and writing launch files
pub struct CreateServerUseCase {
    renderer: Arc<TemplateRenderer>,
    output_service: Arc<dyn OutputService>,
    config: ScaffoldConfig,
}

impl CreateServerUseCase {
    pub fn new(
        renderer: Arc<TemplateRenderer>,
        output_service: Arc<dyn OutputService>,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            renderer,
            output_service,
            config,
        }
    }

    pub async fn execute(
        &self,
        request: CreateServerRequest,
    ) -> Result<ServerReport, ApplicationError> {
        let server_path = request.server_path;
        self.output_service
            .ensure_directory(&server_path.join("plugins"))
            .await?;

        let Some(source_jar) = request.source_jar else {
            error!("No source server.jar configured");
            console::line(
                "❌ Error: No source server.jar configured. \
                 Pass --server-jar or set SPIGOT_SCAFFOLD_SERVER_JAR.",
            );
            return Ok(ServerReport {
                server_path,
                jar: JarStatus::NotConfigured,
                files: Vec::new(),
            });
        };

        if !self.output_service.exists(&source_jar).await? {
            error!(path = %source_jar.display(), "Source server.jar not found");
            console::line(format!(
                "❌ Error: Source server.jar not found at:\n{}",
                source_jar.display()
            ));
            return Ok(ServerReport {
                server_path,
                jar: JarStatus::SourceMissing(source_jar),
                files: Vec::new(),
            });
        }

        let target_jar = server_path.join(SERVER_JAR);
        let jar = match self
            .output_service
            .copy_if_absent(&source_jar, &target_jar)
            .await?
        {
            CopyOutcome::Copied => {
                info!(from = %source_jar.display(), to = %target_jar.display(), "Copied server.jar");
                console::line(format!(
                    "✅ server.jar was copied to:\n{}",
                    target_jar.display()
                ));
                JarStatus::Copied
            }
            CopyOutcome::AlreadyPresent => {
                console::line("📄 server.jar already exists in the project, skipping.");
                JarStatus::AlreadyPresent
            }
        };

        let context = RenderContext::for_server(&self.config);
        let targets = [
            (TemplateFile::StartBat, "start.bat", None),
            (TemplateFile::StartSh, "start.sh", Some(0o755)),
            (TemplateFile::Eula, "eula.txt", None),
        ];

        let mut files = Vec::with_capacity(targets.len());
        for (template, file_name, mode) in targets {
            let path = server_path.join(file_name);
            let content = self.renderer.render(template, &context)?;
            let mut artifact = Artifact::new(&path, content);
            if let Some(mode) = mode {
                artifact = artifact.with_permissions(mode);
            }
            let outcome = self.output_service.write_artifact(&artifact).await?;
            console::file_written(&path, outcome);
            files.push(FileReport { path, outcome });
        }

        console::line(format!(
            "\n✅ Server fully set up at:\n{}",
            server_path.display()
        ));

        Ok(ServerReport {
            server_path,
            jar,
            files,
        })
    }
}
