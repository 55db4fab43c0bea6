//! Severity levels that gate which calls reach the writer.

use crate::fmt::Style;
use std::fmt;
use std::str::FromStr;

/// Declaration order is the verbosity order: `Off` suppresses everything, `Trace` lets everything through.
///
/// `Metric` sits between `Off` and `Fatal` so it can be named in configuration,
/// but it never gates anything; metrics have their own unconditional path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Gate always closed.
    #[default]
    Off = 0,
    /// Pseudo-level used to tag metric lines.
    Metric = 1,
    /// The process cannot continue.
    Fatal = 2,
    /// Unrecoverable failures of a single operation.
    Error = 3,
    /// Non-fatal anomalies that may need attention.
    Warn = 4,
    /// Normal operational milestones.
    Info = 5,
    /// Diagnostics too noisy for normal operation.
    Debug = 6,
    /// High-volume instrumentation.
    Trace = 7,
}

impl Level {
    /// Position on the verbosity scale.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// A logger configured at `self` emits a call at `level` iff this returns true.
    #[must_use]
    pub const fn enables(self, level: Self) -> bool {
        self.rank() >= level.rank()
    }

    /// Levels that have an emitting method on the stream logger.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        !matches!(self, Self::Off | Self::Metric)
    }

    /// Lowercase name, as written in config files and CLI args.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Metric => "metric",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Style used for the `[level]` tag unless a custom logger overrides it.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Off => Style::Grey,
            Self::Metric => Style::Green,
            Self::Fatal => Style::BgRed,
            Self::Error => Style::Red,
            Self::Warn => Style::Yellow,
            Self::Info => Style::Blue,
            Self::Debug => Style::Cyan,
            Self::Trace => Style::Magenta,
        }
    }

    /// The whole scale, least verbose first.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Off,
            Self::Metric,
            Self::Fatal,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    /// The levels with an emitting method, least verbose first.
    #[must_use]
    pub const fn plain() -> [Self; 6] {
        [
            Self::Fatal,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "metric" => Ok(Self::Metric),
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
