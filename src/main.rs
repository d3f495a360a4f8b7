//! spigot-scaffold CLI entrypoint
//! Collects the run inputs and dispatches to the scaffolding use case.
#![deny(unsafe_code)]
mod prompt;

// Internal imports (std, crate)
use spigot_scaffold::{
    application::{ScaffoldRequest, ScaffoldUseCase},
    core::ScaffoldConfig,
    generation::{TemplateRenderer, WriteOutcome},
    infrastructure::{FileSystemOutputService, ShellCommandExecutor},
};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spigot-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plugin name, or 'skip' to only set up a server
    #[arg(long)]
    plugin_name: Option<String>,
    /// Folder the project directory is created in
    #[arg(long)]
    target_dir: Option<PathBuf>,
    /// Java package name (e.g. com.example.demo), or 'skip'
    #[arg(long = "package")]
    package_name: Option<String>,
    /// Source server.jar copied into the project's server directory
    #[arg(long)]
    server_jar: Option<PathBuf>,
    /// Config file (defaults to the per-user spigot-scaffold/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory with template overrides
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Do not run the build command after scaffolding the plugin
    #[arg(long)]
    no_build: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting spigot-scaffold");

    let mut config = ScaffoldConfig::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if let Some(jar) = &cli.server_jar {
        config.server_jar = Some(jar.clone());
    }
    debug!(?config, "Resolved configuration");

    let renderer = TemplateRenderer::load(cli.template_dir.as_deref())
        .await
        .context("Failed to load templates")?;

    println!("\n🧙‍♂️ Spigot Plugin Generator with integrated Server Setup");

    let request = resolve_request(&cli)?;

    let scaffolder = ScaffoldUseCase::new(
        Arc::new(renderer),
        Arc::new(FileSystemOutputService::new()),
        Arc::new(ShellCommandExecutor::inherited()),
        config,
    )
    .with_build(!cli.no_build);

    let report = scaffolder
        .execute(request)
        .await
        .context("Scaffolding failed")?;

    let created = report
        .files()
        .filter(|file| file.outcome == WriteOutcome::Created)
        .count();
    info!(
        base_path = %report.base_path.display(),
        files = report.files().count(),
        created,
        plugin = report.plugin.is_some(),
        build = ?report.plugin.as_ref().map(|p| &p.build),
        server_complete = report.server.is_complete(),
        "Scaffold run finished"
    );
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Take each input from its flag, prompting for the ones left out
fn resolve_request(cli: &Cli) -> anyhow::Result<ScaffoldRequest> {
    let theme = ColorfulTheme::default();

    let plugin_name = match &cli.plugin_name {
        Some(name) => name.clone(),
        None => prompt::plugin_name(&theme)?,
    };
    let target_dir = match &cli.target_dir {
        Some(dir) => dir.clone(),
        None => prompt::target_dir(&theme)?,
    };
    let package_name = match &cli.package_name {
        Some(package) => package.clone(),
        None => prompt::package_name(&theme)?,
    };

    let target_dir = if target_dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        target_dir
    };

    Ok(ScaffoldRequest::new(plugin_name, target_dir, package_name))
}
