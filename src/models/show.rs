//! TV show records produced by the resolvers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a show's season number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonSource {
    /// An `Sxx` token in the folder name.
    Name,
    /// `tmdb/season.txt`.
    Override,
    /// Nothing found, season 1 assumed.
    #[default]
    Default,
}

impl SeasonSource {
    /// Whether the season was stated rather than assumed.
    pub fn is_explicit(self) -> bool {
        self != SeasonSource::Default
    }
}

/// A show's root folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDir {
    /// Parent directory of the show folder.
    pub dir: PathBuf,
    /// Folder name as found on disk.
    pub origin_title: String,
    /// Cleaned title, never empty.
    pub title: String,
    pub year: Option<u16>,
    pub season: u32,
    pub season_source: SeasonSource,
    /// Release format, e.g. `1080p`.
    pub format: Option<String>,
    pub source: Option<String>,
    pub studio: Option<String>,
    /// TMDB id, only ever from `tmdb/id.txt`.
    pub tv_id: Option<u64>,
}

/// An episode file inside a show folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeFile {
    /// Full path of the owning show folder.
    pub dir: PathBuf,
    /// File name with temporary download suffixes removed.
    pub origin_title: String,
    pub season: u32,
    pub episode: u32,
    /// Raw marker the numbers came from, e.g. `S02E05`.
    pub season_episode: String,
    /// Video extension as written in the file name.
    pub suffix: String,
    /// Copied from the owning show.
    pub tv_id: Option<u64>,
}
