//! Built-in scaffold templates and the Tera renderer around them.
//!
//! Every file the scaffolder writes comes from a template embedded in the
//! binary from `templates/`. A template directory supplied at runtime can
//! replace any of them by placing a file at the same relative path, e.g.
//! `<dir>/plugin/pom.xml.tera`.
//!
//! Template names keep the `.tera` suffix so Tera never applies HTML/XML
//! autoescaping to `pom.xml`.

use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use tera::Tera;
use tracing::{debug, info};

use crate::generation::{GenerationError, RenderContext};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// The fixed set of files the scaffolder knows how to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFile {
    MainClass,
    PluginManifest,
    BuildDescriptor,
    StartBat,
    StartSh,
    Eula,
}

impl TemplateFile {
    /// Path of the template relative to the template root
    pub fn source_path(&self) -> &'static str {
        match self {
            TemplateFile::MainClass => "plugin/Main.java.tera",
            TemplateFile::PluginManifest => "plugin/plugin.yml.tera",
            TemplateFile::BuildDescriptor => "plugin/pom.xml.tera",
            TemplateFile::StartBat => "server/start.bat.tera",
            TemplateFile::StartSh => "server/start.sh.tera",
            TemplateFile::Eula => "server/eula.txt",
        }
    }

    /// Whether the file goes through Tera or is copied as-is
    pub fn is_static(&self) -> bool {
        matches!(self, TemplateFile::Eula)
    }

    pub fn all() -> [TemplateFile; 6] {
        [
            TemplateFile::MainClass,
            TemplateFile::PluginManifest,
            TemplateFile::BuildDescriptor,
            TemplateFile::StartBat,
            TemplateFile::StartSh,
            TemplateFile::Eula,
        ]
    }
}

/// Tera-based renderer preloaded with every [`TemplateFile`]
pub struct TemplateRenderer {
    tera: Tera,
    statics: HashMap<TemplateFile, String>,
}

impl TemplateRenderer {
    /// Load the embedded templates only
    pub fn embedded() -> Result<Self, GenerationError> {
        let mut sources = Vec::new();
        for file in TemplateFile::all() {
            sources.push((file, Self::embedded_source(file)?));
        }
        Self::from_sources(sources)
    }

    /// Load the embedded templates, replacing any found under `override_dir`
    pub async fn load(override_dir: Option<&Path>) -> Result<Self, GenerationError> {
        let Some(dir) = override_dir else {
            return Self::embedded();
        };

        if !tokio::fs::try_exists(dir).await? {
            return Err(GenerationError::TemplateNotFound(format!(
                "Template directory does not exist: {}",
                dir.display()
            )));
        }

        let mut sources = Vec::new();
        for file in TemplateFile::all() {
            let candidate = dir.join(file.source_path());
            let content = if tokio::fs::try_exists(&candidate).await? {
                info!(path = %candidate.display(), "Using template override");
                tokio::fs::read_to_string(&candidate).await?
            } else {
                Self::embedded_source(file)?
            };
            sources.push((file, content));
        }
        Self::from_sources(sources)
    }

    fn embedded_source(file: TemplateFile) -> Result<String, GenerationError> {
        let embedded = EmbeddedTemplates::get(file.source_path())
            .ok_or_else(|| GenerationError::TemplateNotFound(file.source_path().to_string()))?;
        String::from_utf8(embedded.data.into_owned()).map_err(|e| {
            GenerationError::RenderError(format!(
                "Template {} is not valid UTF-8: {e}",
                file.source_path()
            ))
        })
    }

    fn from_sources(sources: Vec<(TemplateFile, String)>) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        let mut statics = HashMap::new();
        for (file, content) in sources {
            if file.is_static() {
                statics.insert(file, content);
                continue;
            }
            let name = file.source_path();
            debug!(template = name, "Registering template");
            tera.add_raw_template(name, &content).map_err(|e| {
                GenerationError::RenderError(format!("Failed to add template {name}: {e}"))
            })?;
        }
        Ok(Self { tera, statics })
    }

    /// Render `file` with `context`. Static files are returned verbatim.
    pub fn render(
        &self,
        file: TemplateFile,
        context: &RenderContext,
    ) -> Result<String, GenerationError> {
        if file.is_static() {
            return self.raw(file);
        }
        self.tera
            .render(file.source_path(), &context.to_tera_context())
            .map_err(|e| {
                GenerationError::RenderError(format!(
                    "Failed to render template {}: {e}",
                    file.source_path()
                ))
            })
    }

    fn raw(&self, file: TemplateFile) -> Result<String, GenerationError> {
        self.statics
            .get(&file)
            .cloned()
            .ok_or_else(|| GenerationError::TemplateNotFound(file.source_path().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScaffoldConfig;
    use tempfile::TempDir;

    fn plugin_context() -> RenderContext {
        RenderContext::for_plugin("my-plugin", "com.example.demo", &ScaffoldConfig::default())
    }

    #[test]
    fn test_every_template_is_embedded() {
        for file in TemplateFile::all() {
            assert!(
                EmbeddedTemplates::get(file.source_path()).is_some(),
                "missing {}",
                file.source_path()
            );
        }
    }

    #[test]
    fn test_render_main_class() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let java = renderer
            .render(TemplateFile::MainClass, &plugin_context())
            .unwrap();

        assert!(java.starts_with("package com.example.demo;\n"));
        assert!(java.contains("import org.bukkit.plugin.java.JavaPlugin;"));
        assert!(java.contains("public class myplugin extends JavaPlugin {"));
        assert!(java.contains("getLogger().info(\"my-plugin Plugin enabled!\");"));
        assert!(java.contains("getLogger().info(\"my-plugin Plugin disabled.\");"));
    }

    #[test]
    fn test_render_plugin_manifest() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let yml = renderer
            .render(TemplateFile::PluginManifest, &plugin_context())
            .unwrap();

        assert!(yml.contains("name: my-plugin\n"));
        assert!(yml.contains("version: 1.0\n"));
        assert!(yml.contains("main: com.example.demo.myplugin\n"));
        assert!(yml.contains("api-version: 1.8.8"));
    }

    #[test]
    fn test_render_build_descriptor_is_not_escaped() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let pom = renderer
            .render(TemplateFile::BuildDescriptor, &plugin_context())
            .unwrap();

        assert!(pom.contains("<groupId>com.example.demo</groupId>"));
        assert!(pom.contains("<artifactId>my-plugin</artifactId>"));
        assert!(pom.contains("<maven.compiler.source>8</maven.compiler.source>"));
        assert!(pom.contains("<version>1.8.8-R0.1-SNAPSHOT</version>"));
        assert!(pom.contains(
            "<outputFile>${project.basedir}/server/plugins/my-plugin-1.0.jar</outputFile>"
        ));
        assert!(pom.contains("<minimizeJar>true</minimizeJar>"));
        assert!(!pom.contains("&lt;"));
    }

    #[test]
    fn test_render_start_bat() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let context = RenderContext::for_server(&ScaffoldConfig::default());
        let bat = renderer.render(TemplateFile::StartBat, &context).unwrap();

        assert_eq!(bat, "java -Xmx2G -Xms2G -jar server.jar nogui\npause\n");
    }

    #[test]
    fn test_render_eula_is_verbatim() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let eula = renderer
            .render(TemplateFile::Eula, &RenderContext::new())
            .unwrap();

        assert_eq!(eula, "eula=true");
    }

    #[test]
    fn test_missing_variable_is_render_error() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let err = renderer
            .render(TemplateFile::MainClass, &RenderContext::new())
            .unwrap_err();

        assert!(matches!(err, GenerationError::RenderError(_)));
    }

    #[tokio::test]
    async fn test_override_dir_replaces_single_template() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("server")).unwrap();
        std::fs::write(
            dir.path().join("server/start.bat.tera"),
            "java -Xmx{{ memory }} -jar server.jar\n",
        )
        .unwrap();

        let renderer = TemplateRenderer::load(Some(dir.path())).await.unwrap();
        let context = RenderContext::for_server(&ScaffoldConfig::default());

        assert_eq!(
            renderer.render(TemplateFile::StartBat, &context).unwrap(),
            "java -Xmx2G -jar server.jar\n"
        );
        assert_eq!(
            renderer
                .render(TemplateFile::Eula, &RenderContext::new())
                .unwrap(),
            "eula=true"
        );
    }

    #[tokio::test]
    async fn test_missing_override_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = TemplateRenderer::load(Some(missing.as_path())).await;
        assert!(matches!(result, Err(GenerationError::TemplateNotFound(_))));
    }
}
