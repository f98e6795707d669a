//! Parse command implementation.
//!
//! Shows how a single folder name is classified, or how a single episode
//! file path resolves.

use crate::core::context::Context;
use crate::core::name::{classify_tokens, parse_show_name};
use crate::core::resolver::resolve_episode_path;
use crate::models::config::CollectorConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the parse command.
pub fn parse(name: &str, file: bool, config: &CollectorConfig, json: bool) -> Result<()> {
    let ctx = Context::new(config.clone());
    if file {
        parse_file(&ctx, Path::new(name), json)
    } else {
        parse_name(&ctx, name, json)
    }
}

fn parse_name(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let tokens = classify_tokens(&ctx.classifiers, name)?;
    let parsed = parse_show_name(&ctx.classifiers, name)?;

    if json {
        let value = serde_json::json!({ "tokens": tokens, "parsed": parsed });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "🔍 Tokens".bold().cyan());
    for token in &tokens {
        match &token.marker {
            Some(marker) => println!(
                "  {:<20} {}",
                token.token,
                marker.category().to_string().yellow()
            ),
            None => println!("  {:<20} {}", token.token, "title".green()),
        }
    }
    println!();
    println!("  {} {}", "Title:".bold(), parsed.title);
    print_opt("Year:", parsed.year);
    print_opt("Season:", parsed.season);
    print_opt("Format:", parsed.format.as_deref());
    print_opt("Source:", parsed.source.as_deref());
    print_opt("Studio:", parsed.studio.as_deref());

    Ok(())
}

fn parse_file(ctx: &Context, path: &Path, json: bool) -> Result<()> {
    let Some((show, episode)) = resolve_episode_path(ctx, path)? else {
        println!("{}", "Nothing to resolve (collection folder or not a video)".yellow());
        return Ok(());
    };

    if json {
        let value = serde_json::json!({ "show": show, "episode": episode });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "📺 Episode".bold().cyan());
    println!("  {} {}", "Show:".bold(), show.title);
    print_opt("Year:", show.year);
    println!("  {} {} ({:?})", "Season:".bold(), episode.season, show.season_source);
    println!("  {} {}", "Episode:".bold(), episode.episode);
    println!("  {} {}", "Marker:".bold(), episode.season_episode);
    print_opt("TMDB id:", episode.tv_id);
    println!("  {} {}", "NFO:".bold(), episode.nfo_file().display());
    println!("  {} {}", "Thumb:".bold(), episode.thumb_file().display());

    Ok(())
}

fn print_opt<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(value) => println!("  {} {}", label.bold(), value),
        None => println!("  {} {}", label.bold(), "-".dimmed()),
    }
}
