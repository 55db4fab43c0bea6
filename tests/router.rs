//! Tests for rule resolution and per-stream logger memoization.

use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use std::thread;
use streamlog::{
    BufferWriter, Error, Layout, Level, Message, Options, ParseProblem, Router, Rule, RuleSet,
    Sink, Writer, configure, configure_rules,
};

fn buffered() -> (Options, Arc<BufferWriter>) {
    let out = Arc::new(BufferWriter::new());
    let options = Options::new().layout(Layout::Basic).writer(out.clone());
    (options, out)
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("^svc-a", Level::Debug),
        Rule::new("^svc", Level::Info),
    ]
}

#[test]
fn first_matching_rule_wins() {
    let (options, _out) = buffered();
    let router = configure_rules(&rules(), options).unwrap();

    assert_eq!(router.get_logger("svc-a-worker").level(), Level::Debug);
    assert_eq!(router.get_logger("svc-b").level(), Level::Info);
    assert_eq!(router.get_logger("unrelated").level(), Level::Off);
}

#[test]
fn patterns_are_unanchored() {
    let ruleset = RuleSet::compile(&[Rule::new("worker", Level::Warn)], Level::Off).unwrap();

    assert_eq!(ruleset.resolve("svc-worker-1").level(), Level::Warn);
    assert_eq!(ruleset.resolve("svc-api").level(), Level::Off);
}

#[test]
fn fallback_catches_everything_else() {
    let (options, _out) = buffered();
    let router = Router::new(&rules(), options.fallback_level(Level::Warn)).unwrap();

    assert_eq!(router.resolve("does-not-exist"), Level::Warn);
    assert_eq!(router.resolve(""), Level::Warn);

    let fallback = router.rules().resolve("does-not-exist");
    assert!(fallback.is_fallback());
    assert_eq!(fallback.pattern(), ".*");
}

#[test]
fn ruleset_lists_fallback_last() {
    let ruleset = RuleSet::compile(&rules(), Level::Error).unwrap();
    let patterns: Vec<&str> = ruleset.iter().map(|rule| rule.pattern()).collect();

    assert_eq!(patterns, vec!["^svc-a", "^svc", ".*"]);
    assert_eq!(ruleset.len(), 3);
    assert!(!ruleset.is_empty());
    assert_eq!(ruleset.fallback_level(), Level::Error);
}

#[test]
fn empty_rule_list_uses_fallback_only() {
    let (options, _out) = buffered();
    let router = configure(Vec::<Rule>::new(), options.fallback_level(Level::Info)).unwrap();

    assert_eq!(router.rules().len(), 1);
    assert_eq!(router.get_logger("anything").level(), Level::Info);
}

#[test]
fn loggers_are_memoized_per_name() {
    let (options, _out) = buffered();
    let router = configure_rules(&rules(), options).unwrap();

    let first = router.get_logger("svc-a");
    let second = router.get_logger("svc-a");
    let other = router.get_logger("svc-b");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(router.logger_count(), 2);
}

#[test]
fn resolve_does_not_populate_cache() {
    let (options, _out) = buffered();
    let router = configure_rules(&rules(), options).unwrap();

    assert_eq!(router.resolve("svc-a"), Level::Debug);
    assert_eq!(router.logger_count(), 0);
}

#[test]
fn concurrent_requests_share_one_instance() {
    let (options, _out) = buffered();
    let router = Arc::new(configure_rules(&rules(), options).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = Arc::clone(&router);
            thread::spawn(move || router.get_logger("svc-shared"))
        })
        .collect();
    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(loggers.iter().all(|l| Arc::ptr_eq(l, &loggers[0])));
    assert_eq!(router.logger_count(), 1);
}

#[test]
fn invalid_pattern_fails_construction() {
    let (options, _out) = buffered();
    let err = configure_rules(&[Rule::new("([unclosed", Level::Info)], options).unwrap_err();

    match err {
        Error::InvalidPattern {
            source, pattern, ..
        } => {
            assert_eq!(source, "<inline>");
            assert_eq!(pattern, "([unclosed");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn empty_pattern_is_a_missing_field() {
    let (options, _out) = buffered();
    let err = configure_rules(
        &[Rule::new("^ok", Level::Info), Rule::new("", Level::Debug)],
        options,
    )
    .unwrap_err();

    match err {
        Error::ConfigParse { source, problem } => {
            assert_eq!(source, "<inline>");
            assert_eq!(
                problem,
                ParseProblem::MissingField {
                    index: 1,
                    field: "pattern"
                }
            );
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn builder_collects_rules_and_options() {
    let out = Arc::new(BufferWriter::new());
    let router = Router::builder()
        .rule("^db", Level::Trace)
        .rules([Rule::from(("^http", Level::Warn))])
        .layout(Layout::Basic)
        .fallback_level(Level::Error)
        .writer(out.clone())
        .build()
        .unwrap();

    assert_eq!(router.resolve("db-pool"), Level::Trace);
    assert_eq!(router.resolve("http-server"), Level::Warn);
    assert_eq!(router.resolve("cache"), Level::Error);

    router.get_logger("cache").error("evicted");
    assert_eq!(out.count(Sink::Error), 1);
}

#[test]
fn payments_scenario() {
    let (options, out) = buffered();
    let router = configure(vec![Rule::new("^payments", Level::Error)], options).unwrap();
    let log = router.get_logger("payments-api");

    log.error("charge failed");
    log.warn("retrying");
    log.debug(Message::lazy(|| panic!("debug supplier must not run")));

    let calls = out.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sink, Sink::Error);
    assert!(calls[0].line().ends_with("[error] (payments-api) - charge failed"));

    let other = router.get_logger("search");
    other.fatal("unreachable");
    assert_eq!(out.calls().len(), 1);
}

#[test]
fn debug_option_reports_matches_through_the_writer() {
    let out = Arc::new(BufferWriter::new());
    let options = Options::new()
        .layout(Layout::Basic)
        .debug(true)
        .writer(out.clone());
    let router = configure_rules(&rules(), options).unwrap();

    let before = out.count(Sink::Debug);
    assert!(before > 0);

    router.get_logger("svc-b");
    let lines: Vec<String> = out
        .calls_to(Sink::Debug)
        .iter()
        .map(streamlog::WriteCall::line)
        .collect();
    assert!(lines.iter().any(|l| l.contains("svc-b") && l.contains("/^svc/")));
    assert!(lines.iter().all(|l| l.contains("(@streamlog)")));

    router.get_logger("svc-b");
    assert_eq!(out.count(Sink::Debug), lines.len());
}

#[test]
fn diagnostics_silent_by_default() {
    let (options, out) = buffered();
    let router = configure_rules(&rules(), options).unwrap();
    router.get_logger("svc-a");

    assert!(out.is_empty());
}

/// Looks the stream up again from inside every write.
#[derive(Default)]
struct CallbackWriter {
    router: OnceLock<Weak<Router>>,
    lookups: AtomicUsize,
}

impl Writer for CallbackWriter {
    fn write(&self, _sink: Sink, _args: &[Value]) -> Result<(), Error> {
        if let Some(router) = self.router.get().and_then(Weak::upgrade) {
            router.get_logger("svc-b");
            self.lookups.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[test]
fn writer_may_call_back_into_the_router() {
    let writer = Arc::new(CallbackWriter::default());
    let options = Options::new()
        .layout(Layout::Basic)
        .debug(true)
        .writer(writer.clone());
    let router = Arc::new(configure_rules(&rules(), options).unwrap());
    writer.router.set(Arc::downgrade(&router)).unwrap();

    let logger = router.get_logger("svc-b");

    assert_eq!(writer.lookups.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&logger, &router.get_logger("svc-b")));
    assert_eq!(router.logger_count(), 1);
}
