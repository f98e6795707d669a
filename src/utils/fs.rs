//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Strip one temporary download suffix from a file name.
pub fn filter_tmp_suffix<'a, S: AsRef<str>>(name: &'a str, tmp_suffixes: &[S]) -> &'a str {
    tmp_suffixes
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix.as_ref()))
        .unwrap_or(name)
}

/// Extension of a video file name, as written, if it is a known video type.
pub fn video_suffix<'a, S: AsRef<str>>(name: &'a str, video_suffixes: &[S]) -> Option<&'a str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    video_suffixes
        .iter()
        .any(|v| v.as_ref().eq_ignore_ascii_case(ext))
        .then_some(ext)
}

/// Hidden entries start with a dot.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
