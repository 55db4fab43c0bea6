#![forbid(unsafe_code)]

//! `streamlog` - Stream-scoped console logging with pattern-routed severity levels.
//!
//! An ordered list of `(pattern, level)` rules decides how verbose each named
//! stream is. The first rule whose regular expression matches a stream name
//! wins; a fallback rule catches every name nothing else matched.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use streamlog::{BufferWriter, Layout, Level, Message, Options, Rule, Sink};
//!
//! let out = Arc::new(BufferWriter::new());
//! let create_logger = streamlog::configure(
//!     vec![Rule::new("^payments", Level::Error)],
//!     Options::new().layout(Layout::Basic).writer(out.clone()),
//! )
//! .unwrap();
//!
//! let log = create_logger.get_logger("payments-api");
//! log.error("charge failed");
//! log.warn("retrying");
//! log.debug(Message::lazy(|| unreachable!("debug is disabled")));
//!
//! assert_eq!(out.count(Sink::Error), 1);
//! assert_eq!(out.count(Sink::Warn), 0);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `streamlog` inspection binary

// Core modules (always available)
pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod router;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Format, StreamsConfig};
pub use error::{Error, ParseProblem, PathProblem};
pub use fmt::{ColorFn, Layout, Palette, Style, combine};
pub use level::Level;
pub use logger::{
    CustomLogger, Customizer, Message, MetricName, MetricValue, StreamLogger, Unit,
};
pub use output::{BufferWriter, ConsoleWriter, Sink, WriteCall, Writer};
pub use router::{Options, Router, RouterBuilder, Rule, RuleSet, RuleSource};

#[doc(hidden)]
pub use serde_json::json as __json;

use std::path::Path;

/// Builds a router from a config path or an in-memory rule list.
///
/// The returned router's [`get_logger`](Router::get_logger) is the per-stream
/// logger factory.
///
/// # Errors
/// Path, parse, and pattern errors; there is no partially configured state.
pub fn configure(source: impl Into<RuleSource>, options: Options) -> Result<Router, Error> {
    Router::configure(source, options)
}

/// [`configure`] for rules already in memory.
///
/// # Errors
/// Fails if any rule has an empty or invalid pattern.
pub fn configure_rules(rules: &[Rule], options: Options) -> Result<Router, Error> {
    Router::new(rules, options)
}

/// [`configure`] for a YAML or TOML document on disk.
///
/// # Errors
/// Fails for relative or missing paths, unreadable files, and malformed documents.
pub fn configure_path(path: impl AsRef<Path>, options: Options) -> Result<Router, Error> {
    Router::from_config(path.as_ref(), options)
}
