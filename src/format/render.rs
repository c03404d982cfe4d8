//! Scalar renderers
//!
//! Convert a JSON-like value to text, recursively. The plain variant is
//! compact JSON; the decorated variant quotes strings with single quotes,
//! escapes control characters and color-tags values by kind.

use super::decor::TextDecor;
use chrono::SecondsFormat;
use serde_json::Value;

pub trait ValueRender {
    fn render(&self, value: &Value) -> String;

    /// Render a milliseconds-since-epoch value as a date.
    fn render_date(&self, ms: i64) -> String;
}

/// ISO-8601 with millisecond precision, e.g. `1970-01-01T00:00:00.123Z`.
pub(crate) fn iso_millis(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}

/// Plain rendering: compact JSON, double-quoted strings, unquoted dates.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRender;

impl ValueRender for PlainRender {
    fn render(&self, value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_default()
    }

    fn render_date(&self, ms: i64) -> String {
        iso_millis(ms)
    }
}

/// Decorated rendering over a [`TextDecor`].
pub struct FancyRender<'a> {
    decor: &'a dyn TextDecor,
}

impl<'a> FancyRender<'a> {
    pub fn new(decor: &'a dyn TextDecor) -> Self {
        Self { decor }
    }
}

impl ValueRender for FancyRender<'_> {
    fn render(&self, value: &Value) -> String {
        let decor = self.decor;
        match value {
            Value::Null => decor.bold("null"),
            Value::Bool(b) => decor.yellow(&b.to_string()),
            Value::Number(n) => decor.yellow(&n.to_string()),
            Value::String(s) => decor.green(&format!("'{}'", escape(s))),
            Value::Array(items) => {
                let inner = items
                    .iter()
                    .map(|item| self.render(item))
                    .collect::<Vec<_>>()
                    .join(&decor.magenta(", "));
                format!("{}{}{}", decor.magenta("["), inner, decor.magenta("]"))
            }
            Value::Object(map) if map.is_empty() => decor.magenta("{}"),
            Value::Object(map) => {
                let pairs = map
                    .iter()
                    .map(|(key, value)| {
                        format!("{}{} {}", key, decor.magenta(":"), self.render(value))
                    })
                    .collect::<Vec<_>>()
                    .join(&decor.magenta(", "));
                format!(
                    "{} {} {}",
                    decor.magenta("{"),
                    pairs,
                    decor.magenta("}")
                )
            }
        }
    }

    fn render_date(&self, ms: i64) -> String {
        self.render(&Value::String(iso_millis(ms)))
    }
}

/// Escape a string for single-quoted decorated output. Control characters
/// map to backslash escapes (`\xNN` when no short form exists); printable
/// Unicode passes through.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\x1b' => out.push_str("\\e"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::decor::NoDecor;
    use serde_json::json;

    fn fancy(value: Value) -> String {
        FancyRender::new(&NoDecor).render(&value)
    }

    #[test]
    fn test_plain_is_compact_json() {
        let render = PlainRender;
        assert_eq!(render.render(&json!("string")), "\"string\"");
        assert_eq!(render.render(&json!({"the": "things"})), "{\"the\":\"things\"}");
        assert_eq!(render.render(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_plain_date_is_unquoted_iso() {
        assert_eq!(PlainRender.render_date(456), "1970-01-01T00:00:00.456Z");
    }

    #[test]
    fn test_fancy_scalars() {
        assert_eq!(fancy(json!(null)), "null");
        assert_eq!(fancy(json!(true)), "true");
        assert_eq!(fancy(json!(1234)), "1234");
        assert_eq!(fancy(json!("string")), "'string'");
    }

    #[test]
    fn test_fancy_array() {
        assert_eq!(fancy(json!([1, 2])), "[1, 2]");
    }

    #[test]
    fn test_fancy_object() {
        assert_eq!(fancy(json!({"a": 7})), "{ a: 7 }");
        assert_eq!(fancy(json!({"a": 7, "b": "x"})), "{ a: 7, b: 'x' }");
    }

    #[test]
    fn test_fancy_empty_object() {
        assert_eq!(fancy(json!({})), "{}");
    }

    #[test]
    fn test_fancy_nested() {
        assert_eq!(
            fancy(json!({"headers": {"Content-Length": 12}})),
            "{ headers: { Content-Length: 12 } }"
        );
    }

    #[test]
    fn test_escapes_quotes() {
        assert_eq!(fancy(json!("str'in'g")), "'str\\'in\\'g'");
    }

    #[test]
    fn test_escapes_whitespace_controls() {
        assert_eq!(fancy(json!("str\nin\ng")), "'str\\nin\\ng'");
        assert_eq!(fancy(json!("str\r\ng")), "'str\\r\\ng'");
        assert_eq!(fancy(json!("str\tg")), "'str\\tg'");
    }

    #[test]
    fn test_escapes_named_controls() {
        assert_eq!(fancy(json!("\x07\x08\x0b\x0c\0\x1b")), "'\\a\\b\\v\\f\\0\\e'");
    }

    #[test]
    fn test_escapes_other_controls_as_hex() {
        assert_eq!(fancy(json!("\x01str\x19in\x7fg")), "'\\x01str\\x19in\\x7fg'");
    }

    #[test]
    fn test_printable_unicode_passes_through() {
        assert_eq!(fancy(json!("äüöÄÜÖ")), "'äüöÄÜÖ'");
        assert_eq!(fancy(json!("©®")), "'©®'");
        assert_eq!(fancy(json!("🎉")), "'🎉'");
    }

    #[test]
    fn test_fancy_date_is_quoted() {
        assert_eq!(
            FancyRender::new(&NoDecor).render_date(456),
            "'1970-01-01T00:00:00.456Z'"
        );
    }
}
