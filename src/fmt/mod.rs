//! Rendering concerns split by what they touch: escape codes, the line prefix,
//! and structural pretty-printing of debug payloads.

mod color;
pub mod inspect;
mod mark;

pub use color::{
    ColorFn, Layout, Palette, ParseLayoutError, ParseStyleError, RESET, Style, colorize, combine,
};
pub use inspect::{DEBUG_DEPTH, inspect};
pub use mark::{format_time, mark, mark_at, timestamp};
