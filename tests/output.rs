//! Tests for the console and in-memory writers.

use serde_json::json;
use streamlog::output::join_args;
use streamlog::{BufferWriter, ConsoleWriter, Sink, Writer};

#[test]
fn console_splits_sinks_between_streams() {
    assert!(ConsoleWriter::uses_stderr(Sink::Error));
    assert!(ConsoleWriter::uses_stderr(Sink::Warn));
    assert!(ConsoleWriter::uses_stderr(Sink::Trace));
    assert!(!ConsoleWriter::uses_stderr(Sink::Info));
    assert!(!ConsoleWriter::uses_stderr(Sink::Debug));
}

#[test]
fn args_join_strings_verbatim_and_values_as_json() {
    let line = join_args(&[json!("prefix -"), json!("text"), json!({"a": 1}), json!([true])]);
    assert_eq!(line, r#"prefix - text {"a":1} [true]"#);
}

#[test]
fn buffer_records_calls_in_order() {
    let out = BufferWriter::new();
    out.write(Sink::Trace, &[json!("p"), json!("first")]).unwrap();
    out.write(Sink::Info, &[json!("p"), json!("second")]).unwrap();

    let calls = out.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].sink, Sink::Trace);
    assert_eq!(calls[1].message(), &[json!("second")]);
    assert_eq!(out.count(Sink::Trace), 1);

    out.clear();
    assert!(out.is_empty());
}
