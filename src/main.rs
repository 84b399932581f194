mod cli;
mod server;
mod tools;

use shelf::{config, corpus};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelf", version, about = "Snippet shelf MCP server for AI agents")]
struct Cli {
    /// Config file (defaults to ~/.shelf/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Corpus root directory, overriding config and SHELF_ROOT
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (transport from config: stdio or http)
    Serve {
        /// Override the configured transport
        #[arg(long)]
        transport: Option<String>,
    },
    /// Search every mode for files matching any keyword
    Search {
        #[arg(required = true)]
        keywords: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the files in one mode
    List {
        mode: String,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one file's content to stdout
    Load { mode: String, filename: String },
    /// Check the corpus layout and report problems
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::ShelfConfig::load_from(path)?,
        None => config::ShelfConfig::load()?,
    };
    if let Some(root) = &cli.root {
        config.corpus.root = root.to_string_lossy().into_owned();
    }

    // Log to stderr so stdout stays clean for MCP JSON-RPC and `load` output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            if let Some(transport) = transport {
                config.server.transport = transport;
            }
            server::serve(config).await?;
        }
        Command::Search { keywords, json } => {
            cli::search::search(&config, &keywords.join(" "), json)?;
        }
        Command::List { mode, json } => {
            cli::list::list(&config, &mode, json)?;
        }
        Command::Load { mode, filename } => {
            cli::load::load(&config, &mode, &filename)?;
        }
        Command::Doctor => {
            cli::doctor::doctor(&config)?;
        }
    }

    Ok(())
}
