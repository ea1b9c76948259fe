use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stint_cli::commands::{
    delete, edit, export, log, resume, start, status, stop, suggest, table, theme, watch,
};
use stint_cli::{Cli, Commands, Config};
use stint_store::{JsonFileStorage, Tracker};

/// Load config and build the tracker over the JSON state file.
fn open_tracker(config_path: Option<&Path>) -> Result<Tracker<JsonFileStorage>> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(Tracker::new(JsonFileStorage::new(config.storage_path)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = std::io::stdout();

    match &cli.command {
        Some(Commands::Start { task }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            start::run(&mut stdout, &tracker, task).await?;
        }
        Some(Commands::Stop) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            stop::run(&mut stdout, &tracker).await?;
        }
        Some(Commands::Resume { task }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            resume::run(&mut stdout, &tracker, task.as_deref()).await?;
        }
        Some(Commands::Status) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            status::run(&mut stdout, &tracker).await?;
        }
        Some(Commands::Log) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            log::run(&mut stdout, &tracker).await?;
        }
        Some(Commands::Table) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            table::run(&mut stdout, &tracker).await?;
        }
        Some(Commands::Watch) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            watch::run(&tracker).await?;
        }
        Some(Commands::Edit { id, task }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            edit::run(&mut stdout, &tracker, *id, task).await?;
        }
        Some(Commands::Delete { id }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            delete::run(&mut stdout, &tracker, *id).await?;
        }
        Some(Commands::Export { output }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            export::run(&mut stdout, &tracker, output.as_deref()).await?;
        }
        Some(Commands::Suggest { pattern }) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            suggest::run(&mut stdout, &tracker, pattern.as_deref()).await?;
        }
        Some(Commands::Theme) => {
            let tracker = open_tracker(cli.config.as_deref())?;
            theme::run(&mut stdout, &tracker).await?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
