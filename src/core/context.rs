//! Resolver context.

use super::classifier::ClassifierChain;
use super::overrides::{FsOverrides, OverrideProvider};
use crate::models::config::CollectorConfig;

/// Everything a resolver call needs, passed in explicitly.
///
/// Log lines from the resolvers are emitted inside `span`, so each worker
/// can tag its output without touching global state.
pub struct Context {
    pub config: CollectorConfig,
    pub classifiers: ClassifierChain,
    pub overrides: Box<dyn OverrideProvider>,
    pub span: tracing::Span,
}

impl Context {
    /// Standard classifiers, overrides read from disk.
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            classifiers: ClassifierChain::standard(),
            overrides: Box::new(FsOverrides),
            span: tracing::info_span!("shows"),
        }
    }

    pub fn with_overrides<O: OverrideProvider + 'static>(mut self, overrides: O) -> Self {
        self.overrides = Box::new(overrides);
        self
    }

    pub fn with_classifiers(mut self, classifiers: ClassifierChain) -> Self {
        self.classifiers = classifiers;
        self
    }

    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("classifiers", &self.classifiers)
            .finish_non_exhaustive()
    }
}
