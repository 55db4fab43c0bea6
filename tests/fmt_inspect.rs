//! Tests for depth-bounded pretty-printing of debug arguments.

use serde_json::json;
use streamlog::fmt::{DEBUG_DEPTH, inspect};

#[test]
fn scalars_render_as_json() {
    assert_eq!(inspect(&json!(42), DEBUG_DEPTH), "42");
    assert_eq!(inspect(&json!("s"), DEBUG_DEPTH), "\"s\"");
    assert_eq!(inspect(&json!(null), DEBUG_DEPTH), "null");
    assert_eq!(inspect(&json!({}), DEBUG_DEPTH), "{}");
    assert_eq!(inspect(&json!([]), DEBUG_DEPTH), "[]");
}

#[test]
fn objects_are_indented() {
    let rendered = inspect(&json!({"baz": "bazObject"}), DEBUG_DEPTH);
    assert_eq!(rendered, "{\n  \"baz\": \"bazObject\"\n}");

    let rendered = inspect(&json!(["a", 1]), DEBUG_DEPTH);
    assert_eq!(rendered, "[\n  \"a\",\n  1\n]");
}

#[test]
fn containers_below_depth_collapse() {
    let value = json!({"a": {"b": {"c": 1}}, "list": [[1]]});

    let rendered = inspect(&value, 0);
    assert!(rendered.contains("\"a\": [Object]"));
    assert!(rendered.contains("\"list\": [Array]"));

    let rendered = inspect(&value, 1);
    assert!(rendered.contains("\"b\": [Object]"));
    assert!(!rendered.contains("\"c\""));
}

#[test]
fn deep_nesting_stops_at_debug_depth() {
    let value = json!({"a": {"b": {"c": {"d": {"e": {"f": {"g": {"h": {"i": {"j": "end"}}}}}}}}}});
    let rendered = inspect(&value, DEBUG_DEPTH);

    assert!(rendered.contains("\"f\""));
    assert!(rendered.contains("\"g\": [Object]"));
    assert!(!rendered.contains("end"));
}
