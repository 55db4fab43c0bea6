//! Depth-bounded pretty-printing for structured debug arguments.
//!
//! Deeply nested payloads would otherwise flood the terminal; containers
//! below the depth limit collapse to `[Object]` / `[Array]` placeholders.

use serde_json::Value;
use std::fmt::Write;

/// Nesting depth the debug sink expands before collapsing containers.
pub const DEBUG_DEPTH: usize = 6;

/// Renders `value` as indented JSON, expanding at most `depth` levels below the root.
#[must_use]
pub fn inspect(value: &Value, depth: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, depth);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(_) if level > depth => out.push_str("[Object]"),
        Value::Array(_) if level > depth => out.push_str("[Array]"),
        Value::Object(map) => {
            out.push_str("{\n");
            let last = map.len() - 1;
            for (i, (key, child)) in map.iter().enumerate() {
                indent(out, level + 1);
                let _ = write!(out, "{}: ", Value::String(key.clone()));
                write_value(out, child, level + 1, depth);
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, level);
            out.push('}');
        }
        Value::Array(items) => {
            out.push_str("[\n");
            let last = items.len() - 1;
            for (i, child) in items.iter().enumerate() {
                indent(out, level + 1);
                write_value(out, child, level + 1, depth);
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, level);
            out.push(']');
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}
