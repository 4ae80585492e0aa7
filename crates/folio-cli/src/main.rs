use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the portfolio page
    Run,
    /// Fetch and print repository statistics
    Stats {
        /// Repository owner (defaults to the configured username)
        #[arg(short = 'u', long)]
        user: Option<String>,
        /// Print the figures as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the project catalog
    Projects {
        /// Only show one category (e.g. discord, web)
        #[arg(short = 'c', long)]
        category: Option<String>,
        /// Show the full details of one project
        #[arg(long)]
        id: Option<u32>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The page owns the terminal, so its logs go to a file
    let interactive = matches!(cli.command, None | Some(Commands::Run));
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Stats { user, json }) => commands::stats::run(&config, user, json).await,
        Some(Commands::Projects { category, id }) => {
            commands::projects::run(category.as_deref(), id)
        }
        Some(Commands::Config) => commands::config::run(&config),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
