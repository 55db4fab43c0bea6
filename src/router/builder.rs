//! Router options and the stepwise builder around them.

use super::Router;
use super::rules::Rule;
use crate::fmt::Layout;
use crate::level::Level;
use crate::output::{ConsoleWriter, Writer};
use std::sync::Arc;

/// Settings shared by every stream logger a router creates.
#[derive(Clone)]
pub struct Options {
    /// `Basic` strips all escape codes.
    pub layout: Layout,
    /// Level of streams no rule matches.
    pub fallback_level: Level,
    /// Enables the library's own `@streamlog` diagnostic stream.
    pub debug: bool,
    /// Defaults to the process console.
    pub writer: Arc<dyn Writer>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            layout: Layout::Color,
            fallback_level: Level::Off,
            debug: false,
            writer: Arc::new(ConsoleWriter::new()),
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("layout", &self.layout)
            .field("fallback_level", &self.fallback_level)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub const fn fallback_level(mut self, level: Level) -> Self {
        self.fallback_level = level;
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    #[must_use]
    pub fn writer(mut self, writer: Arc<dyn Writer>) -> Self {
        self.writer = writer;
        self
    }
}

/// Collects rules and options, then compiles them in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RouterBuilder {
    rules: Vec<Rule>,
    options: Options,
}

impl RouterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one rule; earlier rules take precedence.
    #[must_use]
    pub fn rule(mut self, pattern: impl Into<String>, level: Level) -> Self {
        self.rules.push(Rule::new(pattern, level));
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.options.layout = layout;
        self
    }

    #[must_use]
    pub const fn fallback_level(mut self, level: Level) -> Self {
        self.options.fallback_level = level;
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    #[must_use]
    pub fn writer(mut self, writer: Arc<dyn Writer>) -> Self {
        self.options.writer = writer;
        self
    }

    /// # Errors
    /// Fails if any rule has an empty or invalid pattern.
    pub fn build(self) -> Result<Router, crate::Error> {
        Router::new(&self.rules, self.options)
    }
}
