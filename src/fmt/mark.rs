//! The prefix every stream line starts with: `HH:MM:SS [level] (stream) -`.

use super::color::{Palette, Style};
use chrono::{DateTime, Local};

/// Wall-clock time at second resolution.
#[must_use]
pub fn timestamp() -> String {
    format_time(&Local::now())
}

#[must_use]
pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Renders a prefix for `tag` on `stream`, painting the tag with `style`.
///
/// `tag` is a level name in practice; custom loggers pass their own level with an override style.
#[must_use]
pub fn mark(palette: Palette, tag: &str, style: Style, stream: &str) -> String {
    mark_at(palette, &timestamp(), tag, style, stream)
}

/// Same as [`mark`] with a caller-supplied timestamp.
#[must_use]
pub fn mark_at(palette: Palette, time: &str, tag: &str, style: Style, stream: &str) -> String {
    let time = palette.paint(Style::Grey, time);
    let tag = palette.paint(style, &format!("[{tag}]"));
    format!("{time} {tag} ({stream}) -")
}
