//! In-memory writer that records every call instead of printing it.
//!
//! Tests and embedding applications use it to assert on what a stream logger
//! dispatched: which sink, how many times, and with which arguments.

use super::{Sink, Writer, join_args};
use serde_json::Value;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One recorded `Writer::write` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteCall {
    pub sink: Sink,
    pub args: Vec<Value>,
}

impl WriteCall {
    /// The rendered prefix (first argument), or `""` when absent.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.args.first().and_then(Value::as_str).unwrap_or_default()
    }

    /// Arguments after the prefix.
    #[must_use]
    pub fn message(&self) -> &[Value] {
        self.args.get(1..).unwrap_or_default()
    }

    /// The whole call rendered the way the console writer would print it.
    #[must_use]
    pub fn line(&self) -> String {
        join_args(&self.args)
    }
}

#[derive(Debug, Default)]
pub struct BufferWriter {
    calls: Mutex<Vec<WriteCall>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<WriteCall> {
        self.lock().clone()
    }

    /// Calls that landed on `sink`.
    #[must_use]
    pub fn calls_to(&self, sink: Sink) -> Vec<WriteCall> {
        self.lock()
            .iter()
            .filter(|call| call.sink == sink)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count(&self, sink: Sink) -> usize {
        self.lock().iter().filter(|call| call.sink == sink).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking test thread must not hide the calls recorded before it.
    fn lock(&self) -> MutexGuard<'_, Vec<WriteCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Writer for BufferWriter {
    fn write(&self, sink: Sink, args: &[Value]) -> Result<(), crate::Error> {
        self.lock().push(WriteCall {
            sink,
            args: args.to_vec(),
        });
        Ok(())
    }
}
