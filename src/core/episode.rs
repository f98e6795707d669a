//! Season/episode extraction from episode file names.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `S02E05`, `s2.e5`, `S02 E05`, `S01EP05`, `S01.EP05`
static SXXEXX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)s(\d{1,3})[ ._-]?ep?(\d{1,4})").unwrap());

/// `2x05`
static NXNN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[ ._\-\[])((\d{1,2})x(\d{1,4}))(?:$|[ ._\-\]])").unwrap());

/// `E05`, `EP05` standing alone
static EPISODE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[ ._\-\[])(ep?(\d{1,4}))(?:$|[ ._\-\]])").unwrap());

/// A season/episode marker found in a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeMatch {
    /// The matched substring, e.g. `S02E05`.
    pub marker: String,
    /// `None` when the marker only carries an episode number.
    pub season: Option<u32>,
    pub episode: u32,
}

/// Find the season/episode marker in a file name.
///
/// Episode `0` is never a match.
pub fn match_episode(name: &str) -> Option<EpisodeMatch> {
    if let Some(caps) = SXXEXX_RE.captures(name) {
        let season = caps.get(1)?.as_str().parse().ok()?;
        let episode: u32 = caps.get(2)?.as_str().parse().ok()?;
        return (episode > 0).then(|| EpisodeMatch {
            marker: caps[0].to_string(),
            season: Some(season),
            episode,
        });
    }

    if let Some(caps) = NXNN_RE.captures(name) {
        let season = caps.get(2)?.as_str().parse().ok()?;
        let episode: u32 = caps.get(3)?.as_str().parse().ok()?;
        return (episode > 0).then(|| EpisodeMatch {
            marker: caps[1].to_string(),
            season: Some(season),
            episode,
        });
    }

    let caps = EPISODE_ONLY_RE.captures(name)?;
    let episode: u32 = caps.get(2)?.as_str().parse().ok()?;
    (episode > 0).then(|| EpisodeMatch {
        marker: caps[1].to_string(),
        season: None,
        episode,
    })
}
