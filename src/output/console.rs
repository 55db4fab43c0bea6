//! Default writer: the process console.

use super::{Sink, Writer, join_args};
use serde_json::Value;
use std::io::{self, Write};

/// Info and debug lines go to stdout; error, warn, and trace lines go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether `sink` is written to stderr rather than stdout.
    #[must_use]
    pub const fn uses_stderr(sink: Sink) -> bool {
        matches!(sink, Sink::Error | Sink::Warn | Sink::Trace)
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, sink: Sink, args: &[Value]) -> Result<(), crate::Error> {
        let line = join_args(args);
        if Self::uses_stderr(sink) {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
