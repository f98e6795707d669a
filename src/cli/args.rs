//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kodi Collector - Classify TV show folders for TMDB and Kodi
#[derive(Parser, Debug)]
#[command(name = "kodi-collector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config dir>/kodi_collector/config.toml)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan shows roots and resolve every show folder and episode
    Scan {
        /// Shows roots (default: collector.shows_dirs from config)
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a single show folder name or episode file path
    Parse {
        /// Folder name, or episode file path with --file
        #[arg(value_name = "NAME")]
        name: String,

        /// Treat NAME as an episode file path
        #[arg(long)]
        file: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}
