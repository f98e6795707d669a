//! Paths derived from resolved records.
//!
//! Everything here is pure except [`check_cache_dir`].

use super::overrides::CACHE_DIR_NAME;
use crate::models::show::{EpisodeFile, ShowDir};
use std::path::{Path, PathBuf};

/// Show-level NFO file name.
pub const TVSHOW_NFO: &str = "tvshow.nfo";

impl ShowDir {
    /// `<dir>/<origin_title>`
    pub fn full_dir(&self) -> PathBuf {
        self.dir.join(&self.origin_title)
    }

    /// `<full_dir>/tmdb`
    pub fn cache_dir(&self) -> PathBuf {
        self.full_dir().join(CACHE_DIR_NAME)
    }

    pub fn nfo_file(&self) -> PathBuf {
        self.full_dir().join(TVSHOW_NFO)
    }

    pub fn poster_file(&self) -> PathBuf {
        self.full_dir().join("poster.jpg")
    }

    pub fn fanart_file(&self) -> PathBuf {
        self.full_dir().join("fanart.jpg")
    }
}

impl EpisodeFile {
    pub fn full_path(&self) -> PathBuf {
        self.dir.join(&self.origin_title)
    }

    /// File name with the media suffix removed.
    pub fn title_without_suffix(&self) -> &str {
        self.origin_title
            .strip_suffix(self.suffix.as_str())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.origin_title)
    }

    pub fn nfo_file(&self) -> PathBuf {
        self.dir.join(format!("{}.nfo", self.title_without_suffix()))
    }

    pub fn thumb_file(&self) -> PathBuf {
        self.dir
            .join(format!("{}-thumb.jpg", self.title_without_suffix()))
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.dir.join(CACHE_DIR_NAME)
    }
}

/// Create the show's cache directory if it does not exist yet.
///
/// Failures are logged, never returned: without the directory only image
/// caching suffers.
pub fn check_cache_dir(show: &ShowDir) {
    let dir = show.cache_dir();
    if let Err(e) = create_dir_if_missing(&dir) {
        tracing::error!("Create cache dir {} failed: {}", dir.display(), e);
    }
}

fn create_dir_if_missing(dir: &Path) -> std::io::Result<()> {
    match std::fs::create_dir(dir) {
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        other => other,
    }
}
