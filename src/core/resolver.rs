//! Show folder and episode file resolvers.
//!
//! Both resolvers turn one directory entry into a record or a skip. A skip
//! never affects other entries:
//!
//! - `Ok(None)`: not something to resolve (collection folder, non-video file)
//! - `Err(e)` with `e.is_entry_skip()`: looked resolvable but failed
//!
//! Any other error ends the scan pass it happened in.

use super::classifier::is_collection;
use super::context::Context;
use super::episode::match_episode;
use super::name::parse_show_name;
use crate::models::show::{EpisodeFile, SeasonSource, ShowDir};
use crate::utils::fs::{filter_tmp_suffix, video_suffix};
use crate::{Error, Result};
use std::path::Path;

/// Resolve a show folder `name` found under `base_dir`.
pub fn resolve_dir(ctx: &Context, base_dir: &Path, name: &str) -> Result<Option<ShowDir>> {
    let _enter = ctx.span.enter();

    if is_collection(name) {
        tracing::info!("Collection folder skipped: {}", name);
        return Ok(None);
    }

    let parsed = parse_show_name(&ctx.classifiers, name)?;

    let mut show = ShowDir {
        dir: base_dir.to_path_buf(),
        origin_title: name.to_string(),
        title: parsed.title,
        year: parsed.year,
        season: 1,
        season_source: SeasonSource::Default,
        format: parsed.format,
        source: parsed.source,
        studio: parsed.studio,
        tv_id: None,
    };

    let full_dir = show.full_dir();

    match parsed.season {
        Some(season) => {
            show.season = season;
            show.season_source = SeasonSource::Name;
        }
        None => match ctx.overrides.season_override(&full_dir) {
            Ok(Some(season)) => {
                show.season = season;
                show.season_source = SeasonSource::Override;
            }
            Ok(None) => {}
            Err(e) if e.is_entry_skip() => tracing::warn!("Season override ignored: {}", e),
            Err(e) => return Err(e),
        },
    }

    match ctx.overrides.tv_id_override(&full_dir) {
        Ok(Some(id)) => show.tv_id = Some(id),
        Ok(None) => {}
        Err(e) if e.is_entry_skip() => tracing::warn!("TMDB id override ignored: {}", e),
        Err(e) => return Err(e),
    }

    tracing::debug!(
        "Resolved show {:?}: title={:?} year={:?} season={} ({:?}) tv_id={:?}",
        name,
        show.title,
        show.year,
        show.season,
        show.season_source,
        show.tv_id
    );

    Ok(Some(show))
}

/// Resolve an episode file `name` inside `show`.
pub fn resolve_file(ctx: &Context, show: &ShowDir, name: &str) -> Result<Option<EpisodeFile>> {
    let _enter = ctx.span.enter();

    let file_name = filter_tmp_suffix(name, &ctx.config.tmp_suffixes);

    let Some(suffix) = video_suffix(file_name, &ctx.config.video_suffixes) else {
        tracing::debug!("Not a video, skipped: {}", file_name);
        return Ok(None);
    };

    let found = match_episode(file_name);
    let (marker, file_season, episode) = match found {
        Some(m) => (m.marker, m.season, m.episode),
        None => return Err(Error::UnmatchedEpisode(file_name.to_string())),
    };

    let season = if show.season_source.is_explicit() {
        Some(show.season)
    } else {
        file_season
    };

    let season = match season {
        Some(season) if season > 0 => season,
        _ => return Err(Error::UnmatchedEpisode(file_name.to_string())),
    };

    tracing::debug!(
        "Found season {} episode {} in {}",
        season,
        episode,
        file_name
    );

    Ok(Some(EpisodeFile {
        dir: show.full_dir(),
        origin_title: file_name.to_string(),
        season,
        episode,
        season_episode: marker,
        suffix: suffix.to_string(),
        tv_id: show.tv_id,
    }))
}

/// Resolve an absolute episode file path.
///
/// The file's parent is taken as the show folder and its grandparent as the
/// shows root. `Ok(None)` when either level resolves to nothing.
pub fn resolve_episode_path(
    ctx: &Context,
    path: &Path,
) -> Result<Option<(ShowDir, EpisodeFile)>> {
    let file_name = entry_name(path)?;
    let show_dir = path
        .parent()
        .ok_or_else(|| Error::other(format!("No show folder for {}", path.display())))?;
    let show_name = entry_name(show_dir)?;
    let base_dir = show_dir.parent().unwrap_or_else(|| Path::new(""));

    let Some(show) = resolve_dir(ctx, base_dir, show_name)? else {
        return Ok(None);
    };
    let Some(episode) = resolve_file(ctx, &show, file_name)? else {
        return Ok(None);
    };
    Ok(Some((show, episode)))
}

fn entry_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::other(format!("Unusable name: {}", path.display())))
}
