//! Integration tests for the resolvers against real override files.
//!
//! Tests cover:
//! - `tmdb/id.txt` and `tmdb/season.txt` handling
//! - Season precedence between the folder name and `season.txt`
//! - Episode file resolution and derived paths

use kodi_collector::core::context::Context;
use kodi_collector::core::resolver::{resolve_dir, resolve_episode_path, resolve_file};
use kodi_collector::models::config::CollectorConfig;
use kodi_collector::models::show::SeasonSource;
use kodi_collector::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn ctx() -> Context {
    Context::new(CollectorConfig::default())
}

/// Create `<root>/<name>/tmdb/<file>` with `content`.
fn write_override(root: &Path, name: &str, file: &str, content: &str) {
    let cache = root.join(name).join("tmdb");
    fs::create_dir_all(&cache).unwrap();
    fs::write(cache.join(file), content).unwrap();
}

// ========== TMDB ID OVERRIDE ==========

#[test]
fn test_id_file_sets_tv_id() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.S02.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "id.txt", "12345\n");

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.tv_id, Some(12345));
}

#[test]
fn test_no_id_file_leaves_tv_id_unset() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.S02.1080p.WEB-DL";
    fs::create_dir(temp_dir.path().join(name)).unwrap();

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.tv_id, None);
}

#[test]
fn test_unparsable_id_file_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.S02.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "id.txt", "tt0903747");

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.tv_id, None);
}

// ========== SEASON OVERRIDE ==========

#[test]
fn test_season_file_never_beats_name_season() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.S02.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "season.txt", "7");

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.season, 2);
    assert_eq!(show.season_source, SeasonSource::Name);
}

#[test]
fn test_season_file_fills_missing_season() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "season.txt", " 4 \n");

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.season, 4);
    assert_eq!(show.season_source, SeasonSource::Override);
}

#[test]
fn test_bad_season_file_keeps_default() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "season.txt", "zero");

    let show = resolve_dir(&ctx(), temp_dir.path(), name).unwrap().unwrap();
    assert_eq!(show.season, 1);
    assert_eq!(show.season_source, SeasonSource::Default);
}

#[test]
fn test_year_absent() {
    let temp_dir = TempDir::new().unwrap();
    let show = resolve_dir(&ctx(), temp_dir.path(), "Show.Name.S01.720p")
        .unwrap()
        .unwrap();
    assert_eq!(show.year, None);
}

// ========== EPISODE FILES ==========

#[test]
fn test_episode_inherits_show() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.S02.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "id.txt", "999");

    let ctx = ctx();
    let show = resolve_dir(&ctx, temp_dir.path(), name).unwrap().unwrap();
    let file = resolve_file(&ctx, &show, "Show.Name.S02E05.mkv")
        .unwrap()
        .unwrap();

    assert_eq!(file.season, 2);
    assert_eq!(file.episode, 5);
    assert_eq!(file.suffix, "mkv");
    assert_eq!(file.tv_id, Some(999));
    assert_eq!(file.dir, temp_dir.path().join(name));
    assert_eq!(
        file.nfo_file(),
        temp_dir.path().join(name).join("Show.Name.S02E05.nfo")
    );
    assert_eq!(
        file.thumb_file(),
        temp_dir.path().join(name).join("Show.Name.S02E05-thumb.jpg")
    );
}

#[test]
fn test_resolve_episode_path_reads_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let name = "Show.Name.2020.1080p.WEB-DL";
    write_override(temp_dir.path(), name, "season.txt", "3");
    let path = temp_dir.path().join(name).join("Show.Name.E09.mkv");
    fs::write(&path, "x").unwrap();

    let (show, file) = resolve_episode_path(&ctx(), &path).unwrap().unwrap();
    assert_eq!(show.season, 3);
    assert_eq!(file.season, 3);
    assert_eq!(file.episode, 9);
    assert_eq!(file.season_episode, "E09");
}

#[test]
fn test_custom_video_suffixes() {
    let config = CollectorConfig {
        video_suffixes: vec!["strm".to_string()],
        ..Default::default()
    };
    let ctx = Context::new(config);
    let temp_dir = TempDir::new().unwrap();
    let show = resolve_dir(&ctx, temp_dir.path(), "Show.Name.S01.1080p")
        .unwrap()
        .unwrap();

    assert!(resolve_file(&ctx, &show, "Show.Name.S01E01.mkv")
        .unwrap()
        .is_none());
    let file = resolve_file(&ctx, &show, "Show.Name.S01E01.strm")
        .unwrap()
        .unwrap();
    assert_eq!(file.suffix, "strm");
}

#[test]
fn test_unmatched_episode_error() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ctx();
    let show = resolve_dir(&ctx, temp_dir.path(), "Show.Name.2020.1080p")
        .unwrap()
        .unwrap();
    let result = resolve_file(&ctx, &show, "Show.Name.Featurette.mkv");
    assert!(matches!(result, Err(Error::UnmatchedEpisode(_))));
}
