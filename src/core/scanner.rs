//! Shows root scanner.
//!
//! One scan pass over a shows root: every immediate sub-directory is a show
//! folder, every immediate file inside a show folder is an episode
//! candidate. Failures skip the one entry that caused them.

use super::context::Context;
use super::paths::check_cache_dir;
use super::resolver::{resolve_dir, resolve_file};
use crate::models::show::{EpisodeFile, ShowDir};
use crate::utils::fs::{ensure_directory, is_hidden};
use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A resolved show and its episodes.
#[derive(Debug, Clone, Serialize)]
pub struct ShowEntry {
    pub show: ShowDir,
    pub episodes: Vec<EpisodeFile>,
}

/// An entry left out of the results.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a shows root.
#[derive(Debug, Default, Serialize)]
pub struct ScanResult {
    /// Root that was scanned.
    pub root: PathBuf,
    /// Resolved shows, sorted by folder name.
    pub shows: Vec<ShowEntry>,
    /// Entries that looked resolvable but failed.
    pub skipped: Vec<SkippedEntry>,
    /// Show folders looked at.
    pub total_dirs_scanned: usize,
    /// Files looked at inside resolved shows.
    pub total_files_scanned: usize,
}

impl ScanResult {
    /// Total episode count across all shows.
    pub fn total_episodes(&self) -> usize {
        self.shows.iter().map(|s| s.episodes.len()).sum()
    }
}

/// List immediate children of `dir`, sorted by name.
fn children(dir: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read entry: {}", e);
                None
            }
        })
}

/// Scan a shows root.
///
/// A missing or non-directory root is an error, and so is any resolver
/// error that is not an entry skip. Entry skips land in `skipped`.
pub fn scan_shows(root: &Path, ctx: &Context) -> Result<ScanResult> {
    ensure_directory(root)?;

    let mut result = ScanResult {
        root: root.to_path_buf(),
        ..Default::default()
    };

    for entry in children(root) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Non UTF-8 folder name skipped: {}", entry.path().display());
            continue;
        };
        if is_hidden(name) || ctx.config.skip_folders.iter().any(|s| s == name) {
            tracing::debug!("Skipped folder: {}", name);
            continue;
        }

        result.total_dirs_scanned += 1;

        let show = match resolve_dir(ctx, root, name) {
            Ok(Some(show)) => show,
            Ok(None) => continue,
            Err(e) if e.is_entry_skip() => {
                tracing::warn!("Show folder skipped: {}", e);
                result.skipped.push(SkippedEntry {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        check_cache_dir(&show);
        let episodes = scan_episodes(&show, ctx, &mut result)?;
        result.shows.push(ShowEntry { show, episodes });
    }

    tracing::info!(
        "Scanned {}: {} show folders, {} files, {} shows, {} episodes, {} skipped",
        root.display(),
        result.total_dirs_scanned,
        result.total_files_scanned,
        result.shows.len(),
        result.total_episodes(),
        result.skipped.len()
    );

    Ok(result)
}

fn scan_episodes(
    show: &ShowDir,
    ctx: &Context,
    result: &mut ScanResult,
) -> Result<Vec<EpisodeFile>> {
    let mut episodes = Vec::new();

    for entry in children(&show.full_dir()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Non UTF-8 file name skipped: {}", entry.path().display());
            continue;
        };
        if is_hidden(name) {
            continue;
        }

        result.total_files_scanned += 1;

        match resolve_file(ctx, show, name) {
            Ok(Some(episode)) => episodes.push(episode),
            Ok(None) => {}
            Err(e) if e.is_entry_skip() => {
                tracing::warn!("Episode file skipped: {}", e);
                result.skipped.push(SkippedEntry {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    episodes.sort_by_key(|e| (e.season, e.episode));
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overrides::OverrideProvider;
    use crate::Error;
    use tempfile::TempDir;

    struct Offline;

    impl OverrideProvider for Offline {
        fn season_override(&self, _show_dir: &Path) -> Result<Option<u32>> {
            Err(Error::other("provider offline"))
        }

        fn tv_id_override(&self, _show_dir: &Path) -> Result<Option<u64>> {
            Err(Error::other("provider offline"))
        }
    }

    #[test]
    fn test_total_episodes() {
        let result = ScanResult::default();
        assert_eq!(result.total_episodes(), 0);
    }

    #[test]
    fn test_non_skip_error_ends_pass() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("Show.Name.1080p.WEB-DL")).unwrap();

        let ctx = Context::default().with_overrides(Offline);
        let result = scan_shows(temp_dir.path(), &ctx);
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_is_passed_over() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let show = temp_dir.path().join("Show.Name.2020.S01");
        std::fs::create_dir(&show).unwrap();
        std::fs::write(show.join(OsStr::from_bytes(b"Show.\xff.S01E02.mkv")), "x").unwrap();
        std::fs::write(show.join("Show.Name.S01E01.mkv"), "x").unwrap();

        let result = scan_shows(temp_dir.path(), &Context::default()).unwrap();
        assert_eq!(result.total_files_scanned, 1);
        assert_eq!(result.total_episodes(), 1);
        assert!(result.skipped.is_empty());
    }

    // Integration tests for scan_shows() live in tests/scanner_tests.rs
}
