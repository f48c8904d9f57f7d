//! amphibians - fetch and list amphibians in the terminal.

mod config;
mod container;
mod render;
mod screen;

use std::path::PathBuf;
use std::process::ExitCode;

use amphibians_core::AmphibiansViewModel;
use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::container::AppContainer;

#[derive(Parser)]
#[command(name = "amphibians")]
#[command(version)]
#[command(about = "Fetch the amphibian list and render it as text")]
struct Cli {
    /// TOML file with an optional [client] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint base URL; `amphibians` is appended
    #[arg(long)]
    base_url: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Render the first result and exit (status 1 on error)
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.base_url, cli.timeout_secs);
    info!(base_url = %config.client.base_url, "starting");

    let container = AppContainer::new(&config.client)?;
    let view_model = AmphibiansViewModel::new(container.repository);

    let mut stdout = std::io::stdout();
    let exit = if cli.once {
        screen::run_once(&view_model, &mut stdout).await?
    } else {
        screen::run_interactive(&view_model, BufReader::new(tokio::io::stdin()), &mut stdout).await?
    };
    Ok(exit.into())
}
