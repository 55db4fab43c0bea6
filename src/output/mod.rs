//! Where rendered lines go. The console is the default; any `Writer` can stand
//! in for it, including the in-memory recorder used by tests.

mod buffer;
mod console;

pub use buffer::{BufferWriter, WriteCall};
pub use console::ConsoleWriter;

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One of the five console methods a log call can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Sink {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!("unknown writer method: '{s}'")),
        }
    }
}

/// `Send + Sync` so one writer can be shared by every stream logger of a router across threads.
pub trait Writer: Send + Sync {
    /// Emits one line made of `args` on the given sink. The first argument is the rendered prefix.
    ///
    /// # Errors
    /// I/O errors from the underlying target. Stream loggers discard them.
    fn write(&self, sink: Sink, args: &[Value]) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying target.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Console-style rendering: strings verbatim, everything else as compact JSON, space separated.
#[must_use]
pub fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(|arg| match arg {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
