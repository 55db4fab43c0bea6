//! Router construction from config documents.

use super::{Options, Router, Rule};
use crate::config::StreamsConfig;
use crate::fmt::Palette;
use crate::internal::Diagnostics;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a router's rules come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Absolute path of a YAML or TOML document with a `streams` list.
    Path(PathBuf),
    Rules(Vec<Rule>),
}

impl From<&Path> for RuleSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for RuleSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for RuleSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<Vec<Rule>> for RuleSource {
    fn from(rules: Vec<Rule>) -> Self {
        Self::Rules(rules)
    }
}

impl From<&[Rule]> for RuleSource {
    fn from(rules: &[Rule]) -> Self {
        Self::Rules(rules.to_vec())
    }
}

impl Router {
    /// Builds a router from either a config file or an in-memory rule list.
    ///
    /// # Errors
    /// Any path, parse, or pattern error; no router is produced on failure.
    pub fn configure(source: impl Into<RuleSource>, options: Options) -> Result<Self, crate::Error> {
        match source.into() {
            RuleSource::Path(path) => Self::from_config(&path, options),
            RuleSource::Rules(rules) => Self::new(&rules, options),
        }
    }

    /// Loads `path` and builds a router from its `streams`.
    ///
    /// A `fallback_level` in the document takes precedence over `options.fallback_level`.
    ///
    /// # Errors
    /// [`crate::Error::ConfigPath`] before any file access for relative or missing
    /// paths, then parse and pattern errors naming the file.
    pub fn from_config(path: &Path, options: Options) -> Result<Self, crate::Error> {
        let config = StreamsConfig::load_from(path)?;
        Diagnostics::new(
            options.debug,
            Arc::clone(&options.writer),
            Palette::new(options.layout),
        )
        .config_path(&config.path);

        let options = match config.fallback_level {
            Some(level) => options.fallback_level(level),
            None => options,
        };

        Self::from_source(&config.source_name(), &config.rules, options)
    }
}
