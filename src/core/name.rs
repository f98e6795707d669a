//! Show folder name parsing.

use super::classifier::{ClassifierChain, Marker};
use super::title::{TitleAccumulator, TokenKind};
use super::tokenizer::tokenize;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fields recovered from a show folder name alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Cleaned title, never empty.
    pub title: String,
    pub year: Option<u16>,
    /// Season from an `Sxx` token; `None` when absent or zero.
    pub season: Option<u32>,
    pub format: Option<String>,
    pub source: Option<String>,
    pub studio: Option<String>,
}

/// A token and what the chain made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedToken<'a> {
    pub token: &'a str,
    pub marker: Option<Marker>,
}

/// Tokenize a name and classify every token.
pub fn classify_tokens<'a>(
    chain: &ClassifierChain,
    name: &'a str,
) -> Result<Vec<ClassifiedToken<'a>>> {
    Ok(tokenize(name)?
        .into_iter()
        .map(|token| ClassifiedToken {
            token,
            marker: chain.classify(token),
        })
        .collect())
}

/// Parse a show folder name into title and markers.
///
/// When a marker category shows up more than once the last one wins.
pub fn parse_show_name(chain: &ClassifierChain, name: &str) -> Result<ParsedName> {
    let tokens = classify_tokens(chain, name)?;

    let mut parsed = ParsedName::default();
    let mut title = TitleAccumulator::new();

    for ClassifiedToken { token, marker } in tokens {
        let kind = match marker {
            Some(marker) => {
                apply_marker(&mut parsed, marker);
                TokenKind::Marker
            }
            None => TokenKind::Plain,
        };
        title.push(token, kind);
    }

    parsed.title = title.finish();
    if parsed.title.is_empty() {
        return Err(Error::EmptyTitle(name.to_string()));
    }

    Ok(parsed)
}

fn apply_marker(parsed: &mut ParsedName, marker: Marker) {
    match marker {
        Marker::Year(year) => parsed.year = Some(year),
        Marker::Season(0) => {}
        Marker::Season(season) => parsed.season = Some(season),
        Marker::Format(format) => parsed.format = Some(format),
        Marker::SubEpisode => {}
        Marker::Source(source) => parsed.source = Some(source),
        Marker::Studio(studio) => parsed.studio = Some(studio),
    }
}
