//! Hand-written override files.
//!
//! A user can pin values the folder name gets wrong by dropping small text
//! files into the show's `tmdb` cache directory:
//!
//! - `tmdb/season.txt`: season to use when the name has none
//! - `tmdb/id.txt`: TMDB id of the show

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Cache directory name inside a show folder.
pub const CACHE_DIR_NAME: &str = "tmdb";

/// Season override file name.
pub const SEASON_FILE: &str = "season.txt";

/// TMDB id override file name.
pub const ID_FILE: &str = "id.txt";

/// Source of manual corrections for a show folder.
///
/// `Ok(None)` means no override exists. `Err` means one exists but could not
/// be used.
pub trait OverrideProvider: Send + Sync {
    fn season_override(&self, show_dir: &Path) -> Result<Option<u32>>;

    fn tv_id_override(&self, show_dir: &Path) -> Result<Option<u64>>;
}

/// Reads overrides from `<show>/tmdb/*.txt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOverrides;

impl FsOverrides {
    pub fn season_file(show_dir: &Path) -> PathBuf {
        show_dir.join(CACHE_DIR_NAME).join(SEASON_FILE)
    }

    pub fn id_file(show_dir: &Path) -> PathBuf {
        show_dir.join(CACHE_DIR_NAME).join(ID_FILE)
    }
}

impl OverrideProvider for FsOverrides {
    fn season_override(&self, show_dir: &Path) -> Result<Option<u32>> {
        read_positive(&Self::season_file(show_dir))
    }

    fn tv_id_override(&self, show_dir: &Path) -> Result<Option<u64>> {
        read_positive(&Self::id_file(show_dir))
    }
}

/// Read a file holding a single positive integer.
fn read_positive<T>(path: &Path) -> Result<Option<T>>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::OverrideRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    let value: T = content
        .trim_matches(|c: char| c == '\r' || c == '\n' || c == ' ' || c == '\t')
        .parse()
        .map_err(|e: T::Err| Error::OverrideRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if value == T::default() {
        return Err(Error::OverrideRead {
            path: path.to_path_buf(),
            reason: "value must be positive".to_string(),
        });
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn show_with(file: &str, content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_dir.path().join(CACHE_DIR_NAME);
        std::fs::create_dir(&cache).unwrap();
        std::fs::write(cache.join(file), content).unwrap();
        temp_dir
    }

    #[test]
    fn test_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(FsOverrides.season_override(temp_dir.path()).unwrap(), None);
        assert_eq!(FsOverrides.tv_id_override(temp_dir.path()).unwrap(), None);
    }

    #[test]
    fn test_id_with_newline() {
        let show = show_with(ID_FILE, "12345\n");
        assert_eq!(FsOverrides.tv_id_override(show.path()).unwrap(), Some(12345));
    }

    #[test]
    fn test_season_with_whitespace() {
        let show = show_with(SEASON_FILE, " 3\r\n");
        assert_eq!(FsOverrides.season_override(show.path()).unwrap(), Some(3));
    }

    #[test]
    fn test_garbage_is_error() {
        let show = show_with(SEASON_FILE, "three");
        let err = FsOverrides.season_override(show.path()).unwrap_err();
        assert!(matches!(err, Error::OverrideRead { .. }));
    }

    #[test]
    fn test_zero_and_negative_are_errors() {
        let show = show_with(ID_FILE, "0");
        assert!(FsOverrides.tv_id_override(show.path()).is_err());

        let show = show_with(SEASON_FILE, "-2");
        assert!(FsOverrides.season_override(show.path()).is_err());
    }
}
