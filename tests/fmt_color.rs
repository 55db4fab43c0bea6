use streamlog::fmt::{Layout, Palette, RESET, Style, colorize, combine};

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Style::Red), "\x1b[31mhi\x1b[0m");
    assert_eq!(colorize("hi", Style::Green), "\x1b[38;5;82mhi\x1b[0m");
    assert_eq!(colorize("x", Style::BgRed), "\x1b[41m\x1b[30mx\x1b[0m");
}

#[test]
fn basic_layout_passes_text_through() {
    let palette = Palette::new(Layout::Basic);
    for style in Style::all() {
        assert_eq!(palette.paint(style, "plain"), "plain");
    }
}

#[test]
fn color_layout_paints_every_style() {
    let palette = Palette::new(Layout::Color);
    for style in Style::all() {
        let painted = palette.paint(style, "msg");
        assert!(painted.starts_with(style.ansi()));
        assert!(painted.ends_with(RESET));
        assert!(painted.contains("msg"));
    }
}

#[test]
fn combine_applies_left_to_right() {
    let palette = Palette::new(Layout::Color);
    let bold_magenta = combine([palette.color_fn(Style::Bold), palette.color_fn(Style::Magenta)]);

    let expected = colorize(&colorize("x", Style::Bold), Style::Magenta);
    assert_eq!(bold_magenta("x"), expected);
}

#[test]
fn combine_of_nothing_is_identity() {
    let identity = combine(Vec::new());
    assert_eq!(identity("same"), "same");
}

#[test]
fn style_from_str_accepts_spellings() {
    assert_eq!("bgRed".parse::<Style>().unwrap(), Style::BgRed);
    assert_eq!("bg_red".parse::<Style>().unwrap(), Style::BgRed);
    assert_eq!("bg-red".parse::<Style>().unwrap(), Style::BgRed);
    assert_eq!("GREY".parse::<Style>().unwrap(), Style::Grey);
    assert_eq!("gray".parse::<Style>().unwrap(), Style::Gray);
    assert!("sparkly".parse::<Style>().is_err());
}

#[test]
fn layout_from_str() {
    assert_eq!("color".parse::<Layout>().unwrap(), Layout::Color);
    assert_eq!("Basic".parse::<Layout>().unwrap(), Layout::Basic);
    assert!("fancy".parse::<Layout>().is_err());
}
