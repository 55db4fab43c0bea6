//! One-off loggers with their own tag style and target sink.
//!
//! Used for the library's own diagnostic stream, which needs a grey debug tag
//! without going through the per-level dispatch of a normal stream.

use super::{Message, StreamLogger};
use crate::fmt::Style;
use crate::level::Level;
use crate::output::Sink;

/// `(level, style, sink)`: gate on `level`, paint the tag with `style`, write to `sink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customizer {
    pub level: Level,
    pub style: Style,
    pub sink: Sink,
}

impl Customizer {
    #[must_use]
    pub const fn new(level: Level, style: Style, sink: Sink) -> Self {
        Self { level, style, sink }
    }
}

impl From<(Level, Style, Sink)> for Customizer {
    fn from((level, style, sink): (Level, Style, Sink)) -> Self {
        Self::new(level, style, sink)
    }
}

/// Bound logging function returned by [`StreamLogger::custom`].
#[derive(Debug, Clone)]
pub struct CustomLogger {
    logger: StreamLogger,
    customizer: Customizer,
}

impl CustomLogger {
    pub(super) const fn new(logger: StreamLogger, customizer: Customizer) -> Self {
        Self { logger, customizer }
    }

    #[must_use]
    pub const fn customizer(&self) -> Customizer {
        self.customizer
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.logger.is_enabled(self.customizer.level)
    }

    /// Writes the arguments as given; no debug expansion is applied.
    pub fn log<'a>(&self, msg: impl Into<Message<'a>>) {
        let Customizer { level, style, sink } = self.customizer;
        if !self.logger.is_enabled(level) {
            return;
        }
        let prefix = self.logger.mark(level.as_str(), style);
        self.logger.dispatch(sink, prefix, msg.into().resolve());
    }
}
