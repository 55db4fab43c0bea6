//! Per-stream loggers: a fixed threshold, a shared writer, and one method per level.
//!
//! Every call checks the gate before anything else happens: no prefix is
//! rendered and no lazy supplier runs for a disabled level.

mod custom;
mod message;

pub use custom::{CustomLogger, Customizer};
pub use message::{METRIC_DELIMITER, Message, MetricName, MetricValue, Unit, metric_line};

use crate::fmt::{self, ColorFn, DEBUG_DEPTH, Palette, Style};
use crate::level::Level;
use crate::output::{Sink, Writer};
use serde_json::Value;
use std::sync::Arc;

/// Bound to one stream name and one level for its whole lifetime.
///
/// Clones share the writer, so a clone is as good as the original.
#[derive(Clone)]
pub struct StreamLogger {
    stream: Arc<str>,
    level: Level,
    writer: Arc<dyn Writer>,
    palette: Palette,
}

impl std::fmt::Debug for StreamLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamLogger")
            .field("stream", &self.stream)
            .field("level", &self.level)
            .field("layout", &self.palette.layout())
            .finish_non_exhaustive()
    }
}

impl StreamLogger {
    pub fn new(
        stream: impl Into<Arc<str>>,
        level: Level,
        writer: Arc<dyn Writer>,
        palette: Palette,
    ) -> Self {
        Self {
            stream: stream.into(),
            level,
            writer,
            palette,
        }
    }

    #[must_use]
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// The threshold resolved by the router.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    #[must_use]
    pub const fn writer(&self) -> &Arc<dyn Writer> {
        &self.writer
    }

    /// Whether a call at `level` would be written. `Off` is never enabled.
    #[must_use]
    pub const fn is_enabled(&self, level: Level) -> bool {
        !matches!(level, Level::Off) && self.level.enables(level)
    }

    /// Generic entry point behind the per-level methods. `Off` and `Metric` are no-ops here.
    pub fn log<'a>(&self, level: Level, msg: impl Into<Message<'a>>) {
        let Some(sink) = sink_for(level) else {
            return;
        };
        if !self.is_enabled(level) {
            return;
        }

        let args = msg.into().resolve();
        let args = if level == Level::Debug {
            expand_structured(args)
        } else {
            args
        };

        let prefix = self.mark(level.as_str(), level.style());
        self.dispatch(sink, prefix, args);
    }

    pub fn fatal<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Fatal, msg);
    }

    pub fn error<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Error, msg);
    }

    pub fn warn<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Warn, msg);
    }

    pub fn info<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Info, msg);
    }

    /// Non-string arguments are pretty-printed up to [`DEBUG_DEPTH`] levels deep.
    pub fn debug<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Debug, msg);
    }

    pub fn trace<'a>(&self, msg: impl Into<Message<'a>>) {
        self.log(Level::Trace, msg);
    }

    /// Emits `name|value|unit` on the info sink regardless of the configured level.
    pub fn metric(
        &self,
        name: impl Into<MetricName>,
        value: impl Into<MetricValue>,
        unit: Option<Unit>,
    ) {
        let line = metric_line(&name.into(), value, unit);
        let prefix = self.mark(Level::Metric.as_str(), Level::Metric.style());
        self.dispatch(Sink::Info, prefix, vec![Value::String(line)]);
    }

    /// Runs `supplier` only when `level` is enabled, then logs its result at that level.
    pub fn if_enabled(&self, level: Level, supplier: impl FnOnce() -> String) {
        if sink_for(level).is_some() && self.is_enabled(level) {
            self.log(level, supplier());
        }
    }

    /// Builds a one-off logger that gates on its own level and writes straight to its own sink.
    #[must_use]
    pub fn custom(&self, customizer: impl Into<Customizer>) -> CustomLogger {
        CustomLogger::new(self.clone(), customizer.into())
    }

    /// Layers color functions left to right, e.g. bold then magenta.
    #[must_use]
    pub fn combine(&self, fns: impl IntoIterator<Item = ColorFn>) -> ColorFn {
        fmt::combine(fns)
    }

    /// Shorthand for `self.palette().color_fn(style)`.
    #[must_use]
    pub fn color(&self, style: Style) -> ColorFn {
        self.palette.color_fn(style)
    }

    pub(crate) fn mark(&self, tag: &str, style: Style) -> String {
        fmt::mark(self.palette, tag, style, &self.stream)
    }

    pub(crate) fn dispatch(&self, sink: Sink, prefix: String, args: Vec<Value>) {
        let mut line = Vec::with_capacity(args.len() + 1);
        line.push(Value::String(prefix));
        line.extend(args);
        let _ = self.writer.write(sink, &line);
    }
}

/// Fatal shares the error sink; `Off` and `Metric` have no per-level sink.
#[must_use]
pub const fn sink_for(level: Level) -> Option<Sink> {
    match level {
        Level::Off | Level::Metric => None,
        Level::Fatal | Level::Error => Some(Sink::Error),
        Level::Warn => Some(Sink::Warn),
        Level::Info => Some(Sink::Info),
        Level::Debug => Some(Sink::Debug),
        Level::Trace => Some(Sink::Trace),
    }
}

fn expand_structured(args: Vec<Value>) -> Vec<Value> {
    args.into_iter()
        .map(|arg| match arg {
            Value::String(_) => arg,
            other => Value::String(fmt::inspect(&other, DEBUG_DEPTH)),
        })
        .collect()
}
