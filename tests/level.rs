//! Tests for the severity scale.

use streamlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Off < Level::Metric);
    assert!(Level::Metric < Level::Fatal);
    assert!(Level::Fatal < Level::Error);
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Debug);
    assert!(Level::Debug < Level::Trace);
}

#[test]
fn off_ranks_below_every_plain_level() {
    for level in Level::plain() {
        assert!(Level::Off.rank() < level.rank());
        assert!(!Level::Off.enables(level));
    }
}

#[test]
fn enables_matches_rank_comparison() {
    for threshold in Level::all() {
        for level in Level::all() {
            assert_eq!(
                threshold.enables(level),
                threshold.rank() >= level.rank(),
                "{threshold} vs {level}"
            );
        }
    }
}

#[test]
fn plain_excludes_off_and_metric() {
    let plain = Level::plain();
    assert!(!plain.contains(&Level::Off));
    assert!(!plain.contains(&Level::Metric));
    assert_eq!(plain.len(), 6);
    assert!(plain.iter().all(|l| l.is_plain()));
}

#[test]
fn level_display() {
    assert_eq!(Level::Off.to_string(), "off");
    assert_eq!(Level::Metric.to_string(), "metric");
    assert_eq!(Level::Fatal.to_string(), "fatal");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Trace.to_string(), "trace");
}

#[test]
fn level_from_str() {
    assert_eq!("off".parse::<Level>().unwrap(), Level::Off);
    assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!(" debug ".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.input(), "verbose");
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn level_default_is_off() {
    assert_eq!(Level::default(), Level::Off);
}
