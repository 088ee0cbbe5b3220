//! blockdrill - drill from a block into its uncles and transactions, and see
//! where each transaction's value flows.

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    client::{DataService, ExplorerClient},
    state::{App, AppConfig, StartupTarget, platform::paths::AppPaths},
    theme::FlowTheme,
};

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "BLOCKDRILL_LOG";

/// blockdrill - terminal block and transaction drill-down viewer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data service root, e.g. http://localhost:8080/api
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// External explorer used for `o` deep links
    #[arg(long, global = true)]
    explorer_url: Option<String>,

    /// Upper bound on a single fetch, in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Abort a pending fetch when a newer one of the same kind starts
    #[arg(long, global = true)]
    cancel_superseded: bool,

    /// Flow diagram palette (dark or light)
    #[arg(long, global = true, value_parser = parse_theme)]
    theme: Option<FlowTheme>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Open the block view at a block hash
    Block {
        /// Block identifier
        id: String,
    },
    /// Open a transaction in the detail modal
    Txn {
        /// Transaction identifier
        id: String,
        /// Print the flow-graph rows as JSON instead of starting the UI
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path and the effective settings
    Config {
        /// Write the effective settings back to the config file
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Layers command-line flags over the loaded configuration.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(api_url) = &self.api_url {
            config.api_url.clone_from(api_url);
        }
        if let Some(explorer_url) = &self.explorer_url {
            config.explorer_url.clone_from(explorer_url);
        }
        if let Some(secs) = self.timeout {
            config.fetch_timeout_secs = secs;
        }
        if self.cancel_superseded {
            config.cancel_superseded = true;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
    }
}

fn parse_theme(value: &str) -> Result<FlowTheme, String> {
    match value.to_ascii_lowercase().as_str() {
        "dark" => Ok(FlowTheme::Dark),
        "light" => Ok(FlowTheme::Light),
        other => Err(format!("unknown theme '{other}' (expected dark or light)")),
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    let mut config = AppConfig::load();
    cli.apply_overrides(&mut config);

    match cli.command {
        Commands::Block { id } => run_tui(config, StartupTarget::Block(id)).await,
        Commands::Txn { id, json: false } => {
            run_tui(config, StartupTarget::Transaction(id)).await
        }
        Commands::Txn { id, json: true } => print_flow_graph(&config, &id).await,
        Commands::Config { write } => print_config(&config, write),
    }
}

/// Sends `tracing` output to the log file so it never draws over the UI.
fn init_logging() -> Result<()> {
    let log_path = AppPaths::new().log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("blockdrill {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

async fn run_tui(config: AppConfig, startup: StartupTarget) -> Result<()> {
    let mut app = App::new(config, startup)?;
    let mut terminal = tui::init()?;

    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

async fn print_flow_graph(config: &AppConfig, txn_id: &str) -> Result<()> {
    let client = ExplorerClient::new(config.api_url.clone(), config.http_config())?;
    let txn = client.fetch_transaction(txn_id).await?;
    println!("{}", serde_json::to_string_pretty(&txn.flow_graph())?);
    Ok(())
}

fn print_config(config: &AppConfig, write: bool) -> Result<()> {
    if write {
        config.save()?;
    }
    println!("Config file: {}", AppConfig::config_path()?.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
