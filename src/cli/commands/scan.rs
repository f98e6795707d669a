//! Scan command implementation.
//!
//! Runs one independent scan worker per shows root.

use crate::core::context::Context;
use crate::core::scanner::{scan_shows, ScanResult};
use crate::models::config::CollectorConfig;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the scan command.
pub async fn scan(paths: &[PathBuf], config: &CollectorConfig, json: bool) -> Result<()> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        config.shows_dirs.clone()
    } else {
        paths.to_vec()
    };

    if roots.is_empty() {
        return Err(crate::Error::Config(
            "no shows roots given and collector.shows_dirs is empty".to_string(),
        ));
    }

    let results = run_workers(roots, config).await;

    let mut scans = Vec::new();
    for (root, result) in results {
        match result {
            Ok(scan) => scans.push(scan),
            Err(e) => tracing::error!("Scan of {} failed: {}", root.display(), e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&scans)?);
    } else {
        for scan in &scans {
            print_scan(scan);
        }
    }

    Ok(())
}

/// Scan every root on its own blocking worker.
async fn run_workers(
    roots: Vec<PathBuf>,
    config: &CollectorConfig,
) -> Vec<(PathBuf, Result<ScanResult>)> {
    let handles = roots.into_iter().map(|root| {
        let config = config.clone();
        tokio::task::spawn_blocking(move || {
            let span = tracing::info_span!("shows", root = %root.display());
            let ctx = Context::new(config).with_span(span);
            let result = scan_shows(&root, &ctx);
            (root, result)
        })
    });

    let mut results = Vec::new();
    for joined in futures::future::join_all(handles).await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => {
                tracing::error!("Task failed: {}", e);
            }
        }
    }
    results
}

fn print_scan(scan: &ScanResult) {
    println!("{} {}", "📺 Shows root:".bold().cyan(), scan.root.display());
    println!();

    for entry in &scan.shows {
        let show = &entry.show;
        let year = show.year.map(|y| format!(" ({})", y)).unwrap_or_default();
        let tv_id = show
            .tv_id
            .map(|id| format!(" tmdb{}", id))
            .unwrap_or_default();
        println!(
            "  {}{} S{:02}{} - {} episodes",
            show.title.bold(),
            year,
            show.season,
            tv_id.dimmed(),
            entry.episodes.len()
        );
        for episode in &entry.episodes {
            println!(
                "    S{:02}E{:02}  {}",
                episode.season,
                episode.episode,
                episode.origin_title.dimmed()
            );
        }
    }

    if !scan.skipped.is_empty() {
        println!();
        println!("{}", "⚠️  Skipped:".bold().yellow());
        for skipped in &scan.skipped {
            println!("  {} - {}", skipped.path.display(), skipped.reason);
        }
    }

    println!();
    println!("{}", "📊 Scan Summary".bold().green());
    println!("  {} {}", "Show folders:".bold(), scan.total_dirs_scanned);
    println!("  {} {}", "Shows:".bold(), scan.shows.len());
    println!("  {} {}", "Files:".bold(), scan.total_files_scanned);
    println!("  {} {}", "Episodes:".bold(), scan.total_episodes());
    println!("  {} {}", "Skipped:".bold(), scan.skipped.len());
    println!();
}
