//! streamlog's own diagnostic stream, `@streamlog`.
//!
//! Built per router on the same writer the router hands to its loggers, so
//! config and routing decisions show up inline with application output when
//! the `debug` option is set. Disabled diagnostics never format anything.

use crate::fmt::{ColorFn, Palette, Style, combine};
use crate::level::Level;
use crate::logger::{CustomLogger, Customizer, Message, StreamLogger};
use crate::output::{Sink, Writer};
use crate::router::{CompiledRule, RuleSet};
use std::path::Path;
use std::sync::Arc;

/// Stream name of the diagnostic logger.
pub const STREAM: &str = "@streamlog";

pub struct Diagnostics {
    logger: StreamLogger,
    grey: CustomLogger,
    bold_magenta: ColorFn,
    bold_cyan: ColorFn,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.enabled())
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    #[must_use]
    pub fn new(enabled: bool, writer: Arc<dyn Writer>, palette: Palette) -> Self {
        let level = if enabled { Level::Debug } else { Level::Off };
        let logger = StreamLogger::new(STREAM, level, writer, palette);
        let grey = logger.custom(Customizer::new(Level::Debug, Style::Grey, Sink::Debug));
        let bold_magenta = combine([logger.color(Style::Bold), logger.color(Style::Magenta)]);
        let bold_cyan = combine([logger.color(Style::Bold), logger.color(Style::Cyan)]);

        Self {
            logger,
            grey,
            bold_magenta,
            bold_cyan,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.grey.is_enabled()
    }

    /// Writes one grey debug line; `msg` is only resolved when diagnostics are on.
    pub fn debug<'a>(&self, msg: impl Into<Message<'a>>) {
        self.grey.log(msg);
    }

    #[must_use]
    pub fn bold_magenta(&self, text: &str) -> String {
        (self.bold_magenta)(text)
    }

    #[must_use]
    pub fn bold_cyan(&self, text: &str) -> String {
        (self.bold_cyan)(text)
    }

    /// Paints `text` in the tag color of `level`.
    #[must_use]
    pub fn level_colored(&self, level: Level, text: &str) -> String {
        self.logger.palette().paint(level.style(), text)
    }

    pub fn config_path(&self, path: &Path) {
        self.debug(Message::lazy(|| {
            format!(
                "Parsed config file: {}",
                self.bold_magenta(&path.display().to_string())
            )
        }));
    }

    pub fn rules(&self, rules: &RuleSet) {
        self.debug(Message::lazy(|| {
            let listing = rules
                .iter()
                .map(|rule| {
                    format!(
                        "/{}/ => {}",
                        rule.pattern(),
                        self.level_colored(rule.level(), rule.level().as_str())
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} [{listing}]", self.bold_magenta("log config:"))
        }));
    }

    pub fn matched(&self, stream: &str, rule: &CompiledRule) {
        self.debug(Message::lazy(|| {
            let palette = self.logger.palette();
            format!(
                "{} {} {} {} {}",
                palette.paint(Style::Grey, "Match => LogStream"),
                self.bold_magenta(&quote(stream)),
                palette.paint(Style::Grey, "to pattern"),
                self.bold_cyan(&format!("/{}/", rule.pattern())),
                self.level_colored(rule.level(), rule.level().as_str()),
            )
        }));
    }
}

fn quote(text: &str) -> String {
    format!("\"{text}\"")
}
