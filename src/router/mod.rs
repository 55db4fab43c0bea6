//! Maps stream names to loggers through an ordered rule list.
//!
//! Rules compile once into an immutable [`RuleSet`]; loggers are created on
//! first request and memoized for the router's lifetime. The cache is the only
//! mutable state and is guarded so a name is constructed at most once.

mod builder;
mod from_config;
mod rules;

pub use builder::{Options, RouterBuilder};
pub use from_config::RuleSource;
pub use rules::{CompiledRule, FALLBACK_PATTERN, RawRule, Rule, RuleSet};

use crate::error::INLINE_SOURCE;
use crate::fmt::Palette;
use crate::internal::Diagnostics;
use crate::level::Level;
use crate::logger::StreamLogger;
use crate::output::Writer;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Logger factory for one configuration.
pub struct Router {
    rules: RuleSet,
    writer: Arc<dyn Writer>,
    palette: Palette,
    diagnostics: Diagnostics,
    loggers: RwLock<HashMap<String, Arc<StreamLogger>>>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("rules", &self.rules)
            .field("palette", &self.palette)
            .field("loggers", &self.logger_count())
            .finish_non_exhaustive()
    }
}

impl Router {
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Compiles `rules` plus a fallback rule at `options.fallback_level`.
    ///
    /// # Errors
    /// Fails if any rule has an empty or invalid pattern.
    pub fn new(rules: &[Rule], options: Options) -> Result<Self, crate::Error> {
        Self::from_source(INLINE_SOURCE, rules, options)
    }

    /// Same as [`new`](Self::new), attributing compile errors to `source`.
    ///
    /// # Errors
    /// Fails if any rule has an empty or invalid pattern.
    pub fn from_source(
        source: &str,
        rules: &[Rule],
        options: Options,
    ) -> Result<Self, crate::Error> {
        let Options {
            layout,
            fallback_level,
            debug,
            writer,
        } = options;

        let palette = Palette::new(layout);
        let diagnostics = Diagnostics::new(debug, Arc::clone(&writer), palette);
        let rules = RuleSet::compile_from(source, rules, fallback_level)?;
        diagnostics.rules(&rules);

        Ok(Self {
            rules,
            writer,
            palette,
            diagnostics,
            loggers: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the logger for `stream`, creating it on first request.
    ///
    /// Later calls with the same name return the same instance without re-matching.
    pub fn get_logger(&self, stream: &str) -> Arc<StreamLogger> {
        if let Some(logger) = self.read_cache().get(stream) {
            return Arc::clone(logger);
        }

        let mut created = None;
        let logger = {
            let mut cache = self.write_cache();
            let logger = cache.entry(stream.to_string()).or_insert_with(|| {
                let rule = self.rules.resolve(stream);
                created = Some(rule);
                Arc::new(StreamLogger::new(
                    stream,
                    rule.level(),
                    Arc::clone(&self.writer),
                    self.palette,
                ))
            });
            Arc::clone(logger)
        };

        // Written after the guard drops so a writer may call back into the router.
        if let Some(rule) = created {
            self.diagnostics.matched(stream, rule);
        }
        logger
    }

    /// The level `stream` resolves to, without creating or caching a logger.
    #[must_use]
    pub fn resolve(&self, stream: &str) -> Level {
        self.rules.resolve(stream).level()
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Number of distinct stream names requested so far.
    #[must_use]
    pub fn logger_count(&self) -> usize {
        self.read_cache().len()
    }

    /// # Errors
    /// Returns the writer's I/O error, if any.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.writer.flush()
    }

    // The map is left consistent on every path, so a poisoned lock is still usable.
    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<StreamLogger>>> {
        self.loggers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<StreamLogger>>> {
        self.loggers.write().unwrap_or_else(PoisonError::into_inner)
    }
}
