//! Key-aware value formatting
//!
//! Maps a `(key, value)` pair to a `(label, rendered value, unit suffix)`
//! triple. Keys named or prefixed `ts`, `ms` and `bytes` get unit-specific
//! treatment; the matched prefix (and its trailing underscore) is stripped
//! from the label, so `ms_foo` labels as `foo` and `ms` alone has no
//! label.

use super::render::ValueRender;
use serde_json::Value;

const RULES: [&str; 3] = ["ts", "ms", "bytes"];

/// Format one data field. Returns `(label, rendered value, unit)`; the
/// caller omits the `label=` form when the label is empty.
pub fn value_format(
    key: &str,
    value: &Value,
    render: &dyn ValueRender,
) -> (String, String, &'static str) {
    for rule in RULES {
        if let Some(label) = match_rule(rule, key) {
            let (rendered, unit) = match rule {
                "ts" => (format_ts(value, render), ""),
                "ms" => format_ms(value, render),
                _ => format_bytes(value, render),
            };
            return (label.to_string(), rendered, unit);
        }
    }
    (key.to_string(), render.render(value), "")
}

/// Exact name or `<name>_` prefix; first match wins. Returns the stripped
/// label on a match.
fn match_rule<'a>(rule: &str, key: &'a str) -> Option<&'a str> {
    if key == rule {
        return Some("");
    }
    key.strip_prefix(rule)?.strip_prefix('_')
}

fn format_ts(value: &Value, render: &dyn ValueRender) -> String {
    match value.as_i64() {
        Some(ms) => render.render_date(ms),
        None => render.render(value),
    }
}

fn format_ms(value: &Value, render: &dyn ValueRender) -> (String, &'static str) {
    let Some(ms) = value.as_f64() else {
        return (render.render(value), "ms");
    };
    if ms >= 60000.0 {
        let minutes = ms / 60000.0;
        if minutes >= 10.0 {
            (format!("{}", minutes.round() as i64), "m")
        } else {
            (format!("{:.1}", minutes), "m")
        }
    } else if ms >= 100.0 {
        let seconds = ms / 1000.0;
        if seconds >= 10.0 {
            (format!("{}", seconds.round() as i64), "s")
        } else {
            (format!("{:.1}", seconds), "s")
        }
    } else {
        (number_literal(value), "ms")
    }
}

fn format_bytes(value: &Value, render: &dyn ValueRender) -> (String, &'static str) {
    let Some(bytes) = value.as_f64() else {
        return (render.render(value), "B");
    };
    if bytes >= 1024000.0 {
        let mb = bytes / 1024000.0;
        if mb >= 10.0 {
            (format!("{}", mb.round() as i64), "MB")
        } else {
            (format!("{:.1}", mb), "MB")
        }
    } else if bytes >= 512.0 {
        let kb = bytes / 1024.0;
        if kb >= 10.0 {
            (format!("{}", kb.round() as i64), "kB")
        } else {
            (format!("{:.1}", kb), "kB")
        }
    } else {
        (number_literal(value), "B")
    }
}

/// Pass-through rendering of a numeric value, without JSON quoting or
/// decoration.
fn number_literal(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
