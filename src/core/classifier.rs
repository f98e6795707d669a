//! Token classifiers.
//!
//! Each classifier recognizes one kind of marker token in a show folder
//! name. They are tried in a fixed priority order and the first match wins:
//!
//! 1. year (`2020`)
//! 2. season (`S02`)
//! 3. release format (`1080p`, `4K`)
//! 4. sub-episode (`E01-E12`, `Part1`, `OVA`)
//! 5. source (`WEB-DL`, `BluRay`)
//! 6. studio (`NF`, `AMZN`)
//!
//! A token none of them accept is a title candidate.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").unwrap());

static SEASON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[Ss](\d{1,4})$").unwrap());

static FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\d{3,4}[pi]|[248]k|uhd)$").unwrap());

static SUB_EPISODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:s\d{1,4})?ep?\d{1,4}(?:-(?:s\d{1,4})?(?:ep?)?\d{1,4})?|(?:part|pt|cd|disc|disk)\d{1,2}|sp|ova|oad|extras?)$",
    )
    .unwrap()
});

static COLLECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)s\d{1,2}\s*[-~]\s*s?\d{1,2}\b|complete[ ._]series|box[ ._]?set|合集|全集")
        .unwrap()
});

/// Lowest year accepted as a year token.
pub const MIN_YEAR: u16 = 1900;

/// Highest year accepted as a year token.
pub const MAX_YEAR: u16 = 2099;

/// Known release sources (lowercase).
const SOURCES: &[&str] = &[
    "web-dl", "webdl", "webrip", "web-rip", "bluray", "blu-ray", "bdrip", "brrip", "bdremux",
    "remux", "hdtv", "pdtv", "dvdrip", "dvd", "hdrip", "tvrip", "uhdtv",
];

/// Known studio and streaming service tags (lowercase).
const STUDIOS: &[&str] = &[
    "nf", "netflix", "amzn", "amazon", "dsnp", "disney+", "hmax", "hbo", "atvp", "hulu", "pcok",
    "bbc", "itv", "iqiyi", "youku", "wetv", "mgtv", "tencent", "bilibili", "cr",
    "crunchyroll", "baha", "viu",
];

/// Characters stripped from both ends of a token before classifying it.
const BRACKETS: &[char] = &['[', ']', '(', ')', '【', '】'];

/// Marker categories in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Year,
    Season,
    Format,
    SubEpisode,
    Source,
    Studio,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Year => write!(f, "year"),
            Category::Season => write!(f, "season"),
            Category::Format => write!(f, "format"),
            Category::SubEpisode => write!(f, "sub-episode"),
            Category::Source => write!(f, "source"),
            Category::Studio => write!(f, "studio"),
        }
    }
}

/// A classified marker token and the value it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Marker {
    Year(u16),
    Season(u32),
    Format(String),
    SubEpisode,
    Source(String),
    Studio(String),
}

impl Marker {
    /// Category this marker belongs to.
    pub fn category(&self) -> Category {
        match self {
            Marker::Year(_) => Category::Year,
            Marker::Season(_) => Category::Season,
            Marker::Format(_) => Category::Format,
            Marker::SubEpisode => Category::SubEpisode,
            Marker::Source(_) => Category::Source,
            Marker::Studio(_) => Category::Studio,
        }
    }
}

/// Recognizes one category of marker token.
pub trait TokenClassifier: Send + Sync {
    /// Category this classifier produces.
    fn category(&self) -> Category;

    /// Classify a token, returning the marker when it matches.
    fn classify(&self, token: &str) -> Option<Marker>;
}

/// Four digit year in [`MIN_YEAR`]..=[`MAX_YEAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YearClassifier;

impl TokenClassifier for YearClassifier {
    fn category(&self) -> Category {
        Category::Year
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        let caps = YEAR_RE.captures(token)?;
        let year: u16 = caps.get(1)?.as_str().parse().ok()?;
        (MIN_YEAR..=MAX_YEAR)
            .contains(&year)
            .then_some(Marker::Year(year))
    }
}

/// `S` followed only by digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonClassifier;

impl TokenClassifier for SeasonClassifier {
    fn category(&self) -> Category {
        Category::Season
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        let caps = SEASON_RE.captures(token)?;
        caps.get(1)?.as_str().parse().ok().map(Marker::Season)
    }
}

/// Resolution style release formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatClassifier;

impl TokenClassifier for FormatClassifier {
    fn category(&self) -> Category {
        Category::Format
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        FORMAT_RE
            .is_match(token)
            .then(|| Marker::Format(token.to_string()))
    }
}

/// Episode ranges and part designators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubEpisodeClassifier;

impl TokenClassifier for SubEpisodeClassifier {
    fn category(&self) -> Category {
        Category::SubEpisode
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        SUB_EPISODE_RE.is_match(token).then_some(Marker::SubEpisode)
    }
}

/// Release source vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceClassifier;

impl TokenClassifier for SourceClassifier {
    fn category(&self) -> Category {
        Category::Source
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        in_vocabulary(SOURCES, token).then(|| Marker::Source(token.to_string()))
    }
}

/// Studio and streaming service vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudioClassifier;

impl TokenClassifier for StudioClassifier {
    fn category(&self) -> Category {
        Category::Studio
    }

    fn classify(&self, token: &str) -> Option<Marker> {
        in_vocabulary(STUDIOS, token).then(|| Marker::Studio(token.to_string()))
    }
}

fn in_vocabulary(vocabulary: &[&str], token: &str) -> bool {
    let lower = token.to_lowercase();
    vocabulary.contains(&lower.as_str())
}

/// Ordered list of classifiers, tried until the first match.
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn TokenClassifier>>,
}

impl ClassifierChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// The standard chain: year, season, format, sub-episode, source, studio.
    pub fn standard() -> Self {
        Self::new()
            .with(YearClassifier)
            .with(SeasonClassifier)
            .with(FormatClassifier)
            .with(SubEpisodeClassifier)
            .with(SourceClassifier)
            .with(StudioClassifier)
    }

    /// Append a classifier at the lowest priority.
    pub fn with<C: TokenClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifiers.push(Box::new(classifier));
        self
    }

    /// Categories in the order they are tried.
    pub fn categories(&self) -> Vec<Category> {
        self.classifiers.iter().map(|c| c.category()).collect()
    }

    /// Classify a token. `None` means the token is a title candidate.
    pub fn classify(&self, token: &str) -> Option<Marker> {
        let token = token.trim_matches(BRACKETS);
        if token.is_empty() {
            return None;
        }
        self.classifiers.iter().find_map(|c| c.classify(token))
    }
}

impl Default for ClassifierChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ClassifierChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierChain")
            .field("categories", &self.categories())
            .finish()
    }
}

/// Check if a folder name is a multi-show or multi-season aggregate.
pub fn is_collection(name: &str) -> bool {
    COLLECTION_RE.is_match(name)
}
