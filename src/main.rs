//! Kodi Collector CLI
//!
//! A command-line tool that classifies TV show folders and episode files for
//! TMDB lookup and Kodi NFO generation.

use clap::Parser;
use kodi_collector::cli::{
    args::{Cli, Commands},
    commands::{parse, scan},
};
use kodi_collector::models::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose, &config.log.level);

    match cli.command {
        Commands::Scan { paths, json } => {
            scan::scan(&paths, &config.collector, json).await?;
        }

        Commands::Parse { name, file, json } => {
            parse::parse(&name, file, &config.collector, json)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `--verbose` and the configured level.
fn init_logging(verbose: bool, level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kodi_collector={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
