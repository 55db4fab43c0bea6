//! Unified error type for all streamlog operations.
//!
//! Only configuration can fail; once a router exists, logging calls never return errors.

use std::fmt;
use std::path::PathBuf;

/// Prefix on every message so library failures stand out in application logs.
pub const PREFIX: &str = "[@streamlog]";

/// Source name used for rule lists that did not come from a file.
pub const INLINE_SOURCE: &str = "<inline>";

/// Why a config path was rejected before any read was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    NotAbsolute,
    NotFound,
}

/// What was wrong with a config document or rule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseProblem {
    /// The document is not valid YAML/TOML, or has the wrong shape.
    Syntax(String),
    /// No top-level `streams` collection.
    MissingStreams,
    /// A rule entry has no (or an empty) `pattern` or `level`.
    MissingField { index: usize, field: &'static str },
    /// A rule names a level outside the scale.
    UnknownLevel { index: usize, level: String },
    /// An option that conflicts with `fallback_level`.
    UnsupportedOption(&'static str),
}

impl fmt::Display for ParseProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(reason) => f.write_str(reason),
            Self::MissingStreams => f.write_str("missing \"streams\" property"),
            Self::MissingField { index, field } => {
                write!(f, "streams[{index}] is missing required \"{field}\" property")
            }
            Self::UnknownLevel { index, level } => {
                write!(f, "streams[{index}] has unknown level '{level}'")
            }
            Self::UnsupportedOption(option) => {
                write!(f, "\"{option}\" is not supported, use \"fallback_level\"")
            }
        }
    }
}

/// Error type for streamlog operations.
#[derive(Debug)]
pub enum Error {
    /// Config path is relative or does not exist.
    ConfigPath { path: PathBuf, problem: PathProblem },
    /// Config document or rule list is malformed. `source` is the file path or `<inline>`.
    ConfigParse {
        source: String,
        problem: ParseProblem,
    },
    /// A rule pattern is not a valid regular expression.
    InvalidPattern {
        source: String,
        pattern: String,
        error: regex::Error,
    },
    /// I/O error.
    Io(std::io::Error),
}

impl Error {
    /// The config source (file path or `<inline>`) the error refers to, if any.
    #[must_use]
    pub fn source_name(&self) -> Option<String> {
        match self {
            Self::ConfigPath { path, .. } => Some(path.display().to_string()),
            Self::ConfigParse { source, .. } | Self::InvalidPattern { source, .. } => {
                Some(source.clone())
            }
            Self::Io(_) => None,
        }
    }

    pub(crate) fn parse(source: impl Into<String>, problem: ParseProblem) -> Self {
        Self::ConfigParse {
            source: source.into(),
            problem,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigPath {
                path,
                problem: PathProblem::NotAbsolute,
            } => write!(
                f,
                "{PREFIX} Log config file path must be absolute: {}",
                path.display()
            ),
            Self::ConfigPath {
                path,
                problem: PathProblem::NotFound,
            } => write!(f, "{PREFIX} Log config file not found: {}", path.display()),
            Self::ConfigParse { source, problem } => {
                write!(f, "{PREFIX} Log config failed to parse: {source}: {problem}")
            }
            Self::InvalidPattern {
                source,
                pattern,
                error,
            } => write!(
                f,
                "{PREFIX} Log config pattern /{pattern}/ is invalid: {source}: {error}"
            ),
            Self::Io(e) => write!(f, "{PREFIX} I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidPattern { error, .. } => Some(error),
            Self::ConfigPath { .. } | Self::ConfigParse { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
