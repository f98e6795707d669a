//! Title accumulation.
//!
//! The title is the first contiguous run of unclassified tokens. Markers
//! before it are skipped, the first marker after it ends it for good, and
//! plain tokens after that are dropped.

/// How a token was classified, as far as the title is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Matched one of the marker classifiers.
    Marker,
    /// Matched nothing; a title candidate.
    Plain,
}

/// Position of the scan relative to the title run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleState {
    /// No plain token seen yet.
    #[default]
    BeforeTitle,
    /// Inside the title run.
    InTitle,
    /// A marker ended the title run.
    AfterTitle,
}

impl TitleState {
    /// Next state for a token, and whether the token joins the title.
    pub fn next(self, kind: TokenKind) -> (TitleState, bool) {
        match (self, kind) {
            (TitleState::BeforeTitle, TokenKind::Marker) => (TitleState::BeforeTitle, false),
            (TitleState::BeforeTitle, TokenKind::Plain) => (TitleState::InTitle, true),
            (TitleState::InTitle, TokenKind::Plain) => (TitleState::InTitle, true),
            (TitleState::InTitle, TokenKind::Marker) => (TitleState::AfterTitle, false),
            (TitleState::AfterTitle, _) => (TitleState::AfterTitle, false),
        }
    }
}

/// Collects title words while walking the tokens left to right.
#[derive(Debug, Default)]
pub struct TitleAccumulator<'a> {
    state: TitleState,
    words: Vec<&'a str>,
}

impl<'a> TitleAccumulator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TitleState {
        self.state
    }

    /// Feed the next token. Blank tokens carry nothing and are ignored.
    pub fn push(&mut self, token: &'a str, kind: TokenKind) {
        if token.trim().is_empty() {
            return;
        }
        let (state, append) = self.state.next(kind);
        self.state = state;
        if append {
            self.words.push(token);
        }
    }

    /// Join the collected words and clean the result.
    pub fn finish(self) -> String {
        clean_title(&self.words.join(" "))
    }
}

/// Normalize a raw title.
///
/// Brackets and underscores become spaces, whitespace is collapsed, lone
/// dash runs are dropped and dashes are trimmed from both ends. Running it
/// on its own output changes nothing.
pub fn clean_title(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| match c {
            '[' | ']' | '(' | ')' | '【' | '】' | '_' => ' ',
            c => c,
        })
        .collect();

    spaced
        .split_whitespace()
        .filter(|word| !word.chars().all(|c| c == '-'))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}
