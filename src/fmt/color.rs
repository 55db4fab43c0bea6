//! Named ANSI styles and the layout switch that turns them into no-ops.
//!
//! A `Palette` is the per-router map from style name to decorating function;
//! under `Layout::Basic` every entry passes text through unchanged so piped
//! output never sees escape codes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// Every style a prefix, tag, or diagnostic can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Reset,
    Bright,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Purple,
    Cyan,
    White,
    Grey,
    Gray,
    Bold,
    Italic,
    Underline,
    Blink,
    Inverse,
    Hidden,
    Strike,
    /// Red background with black text, reserved for fatal tags.
    BgRed,
}

impl Style {
    /// Green and magenta use the 256-color palette; the 16-color variants are too dim on dark themes.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Bright | Self::Bold => "\x1b[1m",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[38;5;82m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[38;5;205m",
            Self::Purple => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Grey | Self::Gray => "\x1b[90m",
            Self::Italic => "\x1b[3m",
            Self::Underline => "\x1b[4m",
            Self::Blink => "\x1b[5m",
            Self::Inverse => "\x1b[7m",
            Self::Hidden => "\x1b[8m",
            Self::Strike => "\x1b[9m",
            Self::BgRed => "\x1b[41m\x1b[30m",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Bright => "bright",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Grey => "grey",
            Self::Gray => "gray",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Inverse => "inverse",
            Self::Hidden => "hidden",
            Self::Strike => "strike",
            Self::BgRed => "bg-red",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 21] {
        [
            Self::Reset,
            Self::Bright,
            Self::Black,
            Self::Red,
            Self::Green,
            Self::Yellow,
            Self::Blue,
            Self::Magenta,
            Self::Purple,
            Self::Cyan,
            Self::White,
            Self::Grey,
            Self::Gray,
            Self::Bold,
            Self::Italic,
            Self::Underline,
            Self::Blink,
            Self::Inverse,
            Self::Hidden,
            Self::Strike,
            Self::BgRed,
        ]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for style names outside the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(String);

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style: '{}'", self.0)
    }
}

impl std::error::Error for ParseStyleError {}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Accepts `bgRed`, `bg_red` and `bg-red` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Self::all()
            .into_iter()
            .find(|style| style.as_str().replace('-', "") == normalized)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// Whether styles emit escape codes at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Color,
    /// Plain text; every style is the identity.
    Basic,
}

impl Layout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Basic => "basic",
        }
    }
}

/// Returned by `FromStr` for layouts other than `color` and `basic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError(String);

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout: '{}' (expected color or basic)", self.0)
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Ok(Self::Color),
            "basic" | "plain" => Ok(Self::Basic),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// A decorating function; `combine` layers several of them.
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Wraps `text` in the style's escape code and a reset.
#[must_use]
pub fn colorize(text: &str, style: Style) -> String {
    format!("{}{text}{RESET}", style.ansi())
}

/// Applies each function to the message in order, left to right.
#[must_use]
pub fn combine(fns: impl IntoIterator<Item = ColorFn>) -> ColorFn {
    let fns: Vec<ColorFn> = fns.into_iter().collect();
    Arc::new(move |msg: &str| {
        fns.iter().fold(msg.to_string(), |acc, paint| paint(&acc))
    })
}

/// Style lookup bound to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    layout: Layout,
}

impl Palette {
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub const fn layout(self) -> Layout {
        self.layout
    }

    /// Decorates `text`, or returns it unchanged under the basic layout.
    #[must_use]
    pub fn paint(self, style: Style, text: &str) -> String {
        match self.layout {
            Layout::Color => colorize(text, style),
            Layout::Basic => text.to_string(),
        }
    }

    /// The same decoration as a first-class function, for use with [`combine`].
    #[must_use]
    pub fn color_fn(self, style: Style) -> ColorFn {
        Arc::new(move |text: &str| self.paint(style, text))
    }
}
