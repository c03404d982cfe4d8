//! Error capability and stack/cause extraction
//!
//! `ErrorInfo` is the explicit error capability: a value participates in
//! error enrichment when it carries a message, optionally a name, a stack
//! trace, a code and a cause. `ErrorValue` additionally admits plain
//! strings and primitives, which show up as error arguments and causes in
//! practice.

use super::entry::LogEntry;
use serde_json::{Map, Value};

/// Marker a default object-to-string conversion starts with. A canonical
/// message that begins with it carries no usable information.
const OBJECT_MARKER: &str = "[object ";

/// Structured error description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorInfo {
    pub name: Option<String>,
    pub message: Option<String>,
    pub stack: Option<String>,
    pub code: Option<Value>,
    pub cause: Option<Box<ErrorValue>>,
    /// Remaining own properties of an object error. Surfaced as cause
    /// metadata when this value appears as a cause.
    pub extra: Map<String, Value>,
}

impl ErrorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<Value>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<ErrorValue>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Bridge a native Rust error. The message comes from `Display`; one
    /// level of `source()` becomes the cause.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut info = ErrorInfo::new().with_message(err.to_string());
        if let Some(source) = err.source() {
            info.cause = Some(Box::new(ErrorValue::Info(
                ErrorInfo::new().with_message(source.to_string()),
            )));
        }
        info
    }

    /// Build from a JSON object, splitting the well-known properties out
    /// of the remaining metadata. Non-string `name`/`message`/`stack`
    /// values are discarded, as they cannot take part in canonicalization.
    pub fn from_object(map: Map<String, Value>) -> Self {
        let mut info = ErrorInfo::new();
        for (key, value) in map {
            match key.as_str() {
                "name" => {
                    if let Value::String(s) = value {
                        info.name = Some(s);
                    }
                }
                "message" => {
                    if let Value::String(s) = value {
                        info.message = Some(s);
                    }
                }
                "stack" => {
                    if let Value::String(s) = value {
                        info.stack = Some(s);
                    }
                }
                "code" => info.code = Some(value),
                "cause" => info.cause = Some(Box::new(ErrorValue::from_value(value))),
                _ => {
                    info.extra.insert(key, value);
                }
            }
        }
        info
    }

    /// The canonical one-line message: `"{name}: {message}"` when both are
    /// present, falling back to the message, then the name, then the
    /// generic object marker.
    fn canonical_message(&self) -> String {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let message = self.message.as_deref().filter(|s| !s.is_empty());
        match (name, message) {
            (Some(n), Some(m)) => format!("{}: {}", n, m),
            (None, Some(m)) => m.to_string(),
            (Some(n), None) => n.to_string(),
            (None, None) => "[object Object]".to_string(),
        }
    }

    /// Canonical stack string.
    ///
    /// Prefers the raw `stack` when it already contains the canonical
    /// message; otherwise the message line is prepended, since some error
    /// implementations omit it from their trace.
    pub fn stack_string(&self) -> String {
        let message = self.canonical_message();
        if message.starts_with(OBJECT_MARKER) {
            return self.stack.clone().unwrap_or_default();
        }
        match &self.stack {
            Some(stack) if stack.contains(&message) => stack.clone(),
            Some(stack) => format!("{}\n{}", message, stack),
            None => message,
        }
    }
}

impl<E: std::error::Error> From<&E> for ErrorInfo {
    fn from(err: &E) -> Self {
        ErrorInfo::from_error(err)
    }
}

/// An error argument or cause: either a structured error or a bare value
/// such as a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorValue {
    Info(ErrorInfo),
    Value(Value),
}

impl ErrorValue {
    /// Classify a JSON value: objects become structured errors, everything
    /// else stays a bare value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => ErrorValue::Info(ErrorInfo::from_object(map)),
            other => ErrorValue::Value(other),
        }
    }

    /// Canonical stack string. Bare strings are returned verbatim; other
    /// primitives render via their string conversion (`42` becomes `"42"`).
    pub fn stack_string(&self) -> String {
        match self {
            ErrorValue::Info(info) => info.stack_string(),
            ErrorValue::Value(Value::String(s)) => s.clone(),
            ErrorValue::Value(Value::Null) => "null".to_string(),
            ErrorValue::Value(Value::Number(n)) => n.to_string(),
            ErrorValue::Value(Value::Bool(b)) => b.to_string(),
            ErrorValue::Value(other) => other.to_string(),
        }
    }

    /// Own properties of an object cause except `name`, `message` and
    /// `stack`, in insertion order. Empty for bare values.
    pub fn cause_metadata(&self) -> Map<String, Value> {
        let mut meta = Map::new();
        if let ErrorValue::Info(info) = self {
            if let Some(code) = &info.code {
                meta.insert("code".to_string(), code.clone());
            }
            for (key, value) in &info.extra {
                meta.insert(key.clone(), value.clone());
            }
        }
        meta
    }
}

impl From<ErrorInfo> for ErrorValue {
    fn from(info: ErrorInfo) -> Self {
        ErrorValue::Info(info)
    }
}

impl From<&str> for ErrorValue {
    fn from(s: &str) -> Self {
        ErrorValue::Value(Value::String(s.to_string()))
    }
}

impl From<String> for ErrorValue {
    fn from(s: String) -> Self {
        ErrorValue::Value(Value::String(s))
    }
}

/// Whether a JSON object looks like an error: it exposes a string `stack`
/// property. Plain `{name, message}` objects are data, not errors.
pub fn is_error_like(value: &Value) -> bool {
    matches!(value, Value::Object(map) if matches!(map.get("stack"), Some(Value::String(_))))
}

/// Whether a JSON value is truthy in the loose sense used by the `code`
/// attachment rule.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Attach error metadata to an entry: `data.code` and `data.cause` when
/// applicable, the canonical `stack`, and one level of `cause`.
pub fn attach_error(entry: &mut LogEntry, error: &ErrorValue) {
    if let ErrorValue::Info(info) = error {
        let cause_meta = info
            .cause
            .as_deref()
            .map(ErrorValue::cause_metadata)
            .unwrap_or_default();
        let code_truthy = info.code.as_ref().is_some_and(is_truthy);

        if code_truthy || !cause_meta.is_empty() {
            // Metadata only applies to object data; a fresh object is
            // created when there is none. Bare-value data stays untouched.
            let data = entry.data.get_or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(map) = data {
                if let Some(code) = &info.code {
                    map.insert("code".to_string(), code.clone());
                }
                if !cause_meta.is_empty() {
                    map.insert("cause".to_string(), Value::Object(cause_meta));
                }
            }
        }

        entry.stack = Some(info.stack_string());
        if let Some(cause) = &info.cause {
            entry.cause = Some(cause.stack_string());
        }
    } else {
        entry.stack = Some(error.stack_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topic::Topic;
    use serde_json::json;

    #[test]
    fn test_stack_returned_verbatim_when_it_contains_the_message() {
        let info = ErrorInfo::new()
            .with_name("SyntaxError")
            .with_message("Ouch!")
            .with_stack("SyntaxError: Ouch!\n  at xyz:123");

        assert_eq!(info.stack_string(), "SyntaxError: Ouch!\n  at xyz:123");
    }

    #[test]
    fn test_message_prepended_when_stack_omits_it() {
        let info = ErrorInfo::new()
            .with_name("SyntaxError")
            .with_message("Ouch!")
            .with_stack("  at xyz:123");

        assert_eq!(info.stack_string(), "SyntaxError: Ouch!\n  at xyz:123");
    }

    #[test]
    fn test_name_and_message_without_stack() {
        let info = ErrorInfo::new().with_name("MyError").with_message("Cause");

        assert_eq!(info.stack_string(), "MyError: Cause");
    }

    #[test]
    fn test_empty_message_falls_back_to_name() {
        let info = ErrorInfo::new().with_name("TypeError").with_message("");

        assert_eq!(info.stack_string(), "TypeError");
    }

    #[test]
    fn test_message_only() {
        let info = ErrorInfo::new().with_message("Ouch!");

        assert_eq!(info.stack_string(), "Ouch!");
    }

    #[test]
    fn test_object_marker_prefers_raw_stack() {
        let info = ErrorInfo::new().with_stack("  at xyz:123");

        assert_eq!(info.stack_string(), "  at xyz:123");
    }

    #[test]
    fn test_object_marker_without_stack_is_empty() {
        let info = ErrorInfo::new();

        assert_eq!(info.stack_string(), "");
    }

    #[test]
    fn test_string_error_value_verbatim() {
        let value = ErrorValue::from("Oh noes!");

        assert_eq!(value.stack_string(), "Oh noes!");
    }

    #[test]
    fn test_numeric_cause_renders_via_string_conversion() {
        let value = ErrorValue::Value(json!(42));

        assert_eq!(value.stack_string(), "42");
    }

    #[test]
    fn test_cause_metadata_collects_extra_properties() {
        let cause = ErrorValue::Info(
            ErrorInfo::new()
                .with_name("Error")
                .with_message("Cause")
                .with_property("random", 42)
                .with_property("property", true),
        );

        let meta = cause.cause_metadata();
        assert_eq!(Value::Object(meta), json!({"random": 42, "property": true}));
    }

    #[test]
    fn test_cause_metadata_includes_code() {
        let cause = ErrorValue::Info(ErrorInfo::new().with_message("Cause").with_code("E_CODE"));

        let meta = cause.cause_metadata();
        assert_eq!(Value::Object(meta), json!({"code": "E_CODE"}));
    }

    #[test]
    fn test_cause_metadata_empty_for_bare_values() {
        assert!(ErrorValue::Value(json!(42)).cause_metadata().is_empty());
        assert!(ErrorValue::from("text").cause_metadata().is_empty());
    }

    #[test]
    fn test_error_like_requires_string_stack() {
        assert!(is_error_like(&json!({"stack": "  at xyz:123"})));
        assert!(!is_error_like(&json!({"name": "a", "message": "b"})));
        assert!(!is_error_like(&json!({"stack": 42})));
        assert!(!is_error_like(&json!("text")));
    }

    #[test]
    fn test_attach_error_sets_code_and_stack() {
        let mut entry = LogEntry::new(123, "test", Topic::Error);
        let error = ErrorValue::Info(
            ErrorInfo::new()
                .with_name("Error")
                .with_message("Ouch!")
                .with_code("E_CODE"),
        );

        attach_error(&mut entry, &error);

        assert_eq!(entry.data, Some(json!({"code": "E_CODE"})));
        assert_eq!(entry.stack.as_deref(), Some("Error: Ouch!"));
        assert_eq!(entry.cause, None);
    }

    #[test]
    fn test_attach_error_appends_to_existing_data() {
        let mut entry = LogEntry::new(123, "test", Topic::Issue);
        entry.data = Some(json!({"some": "issue"}));
        let error = ErrorValue::Info(
            ErrorInfo::new()
                .with_name("Error")
                .with_message("Ouch!")
                .with_code("E_CODE"),
        );

        attach_error(&mut entry, &error);

        assert_eq!(
            serde_json::to_string(&entry.data).unwrap(),
            "{\"some\":\"issue\",\"code\":\"E_CODE\"}"
        );
    }

    #[test]
    fn test_attach_error_with_cause_metadata() {
        let mut entry = LogEntry::new(123, "test", Topic::Error);
        let cause = ErrorInfo::new()
            .with_name("Error")
            .with_message("Cause")
            .with_code("E_CODE");
        let error = ErrorValue::Info(
            ErrorInfo::new()
                .with_name("Error")
                .with_message("Ouch!")
                .with_cause(cause.clone()),
        );

        attach_error(&mut entry, &error);

        assert_eq!(entry.data, Some(json!({"cause": {"code": "E_CODE"}})));
        assert_eq!(entry.stack.as_deref(), Some("Error: Ouch!"));
        assert_eq!(entry.cause.as_deref(), Some("Error: Cause"));
    }

    #[test]
    fn test_attach_error_without_metadata_leaves_data_absent() {
        let mut entry = LogEntry::new(123, "test", Topic::Error);
        let error = ErrorValue::Info(
            ErrorInfo::new()
                .with_name("Error")
                .with_message("Ouch!")
                .with_cause(ErrorInfo::new().with_name("MyError").with_message("Cause")),
        );

        attach_error(&mut entry, &error);

        assert_eq!(entry.data, None);
        assert_eq!(entry.cause.as_deref(), Some("MyError: Cause"));
    }

    #[test]
    fn test_attach_error_numeric_cause() {
        let mut entry = LogEntry::new(123, "test", Topic::Error);
        let error = ErrorValue::Info(
            ErrorInfo::new()
                .with_message("Ouch!")
                .with_cause(ErrorValue::Value(json!(42))),
        );

        attach_error(&mut entry, &error);

        assert_eq!(entry.cause.as_deref(), Some("42"));
    }

    #[test]
    fn test_from_error_bridges_std_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let info = ErrorInfo::from_error(&io);

        assert_eq!(info.stack_string(), "gone");
    }

    #[test]
    fn test_from_object_splits_known_properties() {
        let value = json!({
            "name": "SyntaxError",
            "message": "Ouch!",
            "stack": "  at xyz:123",
            "code": "E_CODE",
            "random": 7
        });
        let Value::Object(map) = value else { unreachable!() };
        let info = ErrorInfo::from_object(map);

        assert_eq!(info.name.as_deref(), Some("SyntaxError"));
        assert_eq!(info.code, Some(json!("E_CODE")));
        assert_eq!(info.extra.get("random"), Some(&json!(7)));
    }
}
