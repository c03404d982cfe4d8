//! Entry builder
//!
//! Resolves a topic call into a canonical [`LogEntry`]: error-like data
//! becomes the primary error, plain data is shallow-merged over the
//! logger's base data (call keys win, neither source is mutated), and a
//! trailing error argument enriches the entry with stack and cause
//! metadata.

use super::entry::LogEntry;
use super::error_info::{attach_error, is_error_like, ErrorValue};
use super::payload::Payload;
use super::topic::Topic;
use serde_json::{Map, Value};

/// Build an entry with the current wall clock.
pub fn build_entry(
    ns: &str,
    base_data: Option<&Map<String, Value>>,
    topic: Topic,
    payload: Payload,
) -> LogEntry {
    build_entry_at(
        chrono::Utc::now().timestamp_millis(),
        ns,
        base_data,
        topic,
        payload,
    )
}

/// Build an entry at a fixed clock tick.
pub fn build_entry_at(
    ts: i64,
    ns: &str,
    base_data: Option<&Map<String, Value>>,
    topic: Topic,
    payload: Payload,
) -> LogEntry {
    let mut entry = LogEntry::new(ts, ns, topic);
    let (msg, data, error) = payload.into_parts();
    entry.msg = msg;

    match data {
        // Error-like data is the primary error. Base data is seeded first
        // so it coexists with the error-derived code/cause fields.
        Some(value) if is_error_like(&value) => {
            if let Some(base) = base_data {
                entry.data = Some(Value::Object(base.clone()));
            }
            attach_error(&mut entry, &ErrorValue::from_value(value));
        }
        Some(Value::Object(data)) => {
            entry.data = Some(Value::Object(merge(base_data, data)));
            if let Some(error) = &error {
                attach_error(&mut entry, error);
            }
        }
        // Bare values (strings, numbers) are carried as-is; merging is
        // only defined between objects.
        Some(other) => {
            entry.data = Some(other);
            if let Some(error) = &error {
                attach_error(&mut entry, error);
            }
        }
        None => match &error {
            Some(error) => {
                if let Some(base) = base_data {
                    entry.data = Some(Value::Object(base.clone()));
                }
                attach_error(&mut entry, error);
            }
            None => {
                if let Some(base) = base_data {
                    entry.data = Some(Value::Object(base.clone()));
                }
            }
        },
    }

    entry
}

/// Shallow merge: base keys first, call keys win.
fn merge(base: Option<&Map<String, Value>>, data: Map<String, Value>) -> Map<String, Value> {
    match base {
        Some(base) => {
            let mut merged = base.clone();
            for (key, value) in data {
                merged.insert(key, value);
            }
            merged
        }
        None => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_info::ErrorInfo;
    use serde_json::json;

    fn base() -> Map<String, Value> {
        let Value::Object(map) = json!({"base": "data"}) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_message_only() {
        let entry = build_entry_at(123, "test", None, Topic::Ok, "Message".into());

        assert_eq!(
            entry.to_json().unwrap(),
            "{\"ts\":123,\"ns\":\"test\",\"topic\":\"ok\",\"msg\":\"Message\"}"
        );
    }

    #[test]
    fn test_no_arguments() {
        let entry = build_entry_at(123, "test", None, Topic::Timing, Payload::Empty);

        assert_eq!(
            entry.to_json().unwrap(),
            "{\"ts\":123,\"ns\":\"test\",\"topic\":\"timing\"}"
        );
    }

    #[test]
    fn test_message_and_data() {
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Output,
            ("All", json!({"the": "things"})).into(),
        );

        assert_eq!(entry.msg.as_deref(), Some("All"));
        assert_eq!(entry.data, Some(json!({"the": "things"})));
    }

    #[test]
    fn test_data_only() {
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Fetch,
            json!({"host": "example.org", "path": "/"}).into(),
        );

        assert_eq!(entry.msg, None);
        assert_eq!(entry.data, Some(json!({"host": "example.org", "path": "/"})));
    }

    #[test]
    fn test_base_data_alone() {
        let entry = build_entry_at(123, "base", Some(&base()), Topic::Ok, "Text".into());

        assert_eq!(entry.data, Some(json!({"base": "data"})));
    }

    #[test]
    fn test_base_data_merges_under_call_data() {
        let entry = build_entry_at(
            123,
            "test",
            Some(&base()),
            Topic::Ok,
            json!({"and": 7}).into(),
        );

        assert_eq!(
            serde_json::to_string(&entry.data).unwrap(),
            "{\"base\":\"data\",\"and\":7}"
        );
    }

    #[test]
    fn test_call_data_wins_over_base_data() {
        let entry = build_entry_at(
            123,
            "test",
            Some(&base()),
            Topic::Ok,
            json!({"base": "changed"}).into(),
        );

        assert_eq!(entry.data, Some(json!({"base": "changed"})));
    }

    #[test]
    fn test_base_data_is_not_mutated_by_merge() {
        let base = base();
        build_entry_at(
            123,
            "test",
            Some(&base),
            Topic::Ok,
            json!({"and": 7}).into(),
        );

        assert_eq!(Value::Object(base), json!({"base": "data"}));
    }

    #[test]
    fn test_error_only() {
        let error = ErrorInfo::new().with_name("Error").with_message("Ouch");
        let entry = build_entry_at(123, "test", None, Topic::Error, error.into());

        assert_eq!(entry.msg, None);
        assert_eq!(entry.data, None);
        assert_eq!(entry.stack.as_deref(), Some("Error: Ouch"));
    }

    #[test]
    fn test_message_and_error() {
        let error = ErrorInfo::new().with_name("MyError").with_message("Cause");
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Error,
            ("This went south", error).into(),
        );

        assert_eq!(
            entry.to_json().unwrap(),
            "{\"ts\":123,\"ns\":\"test\",\"topic\":\"error\",\
             \"msg\":\"This went south\",\"stack\":\"MyError: Cause\"}"
        );
    }

    #[test]
    fn test_error_only_seeds_base_data() {
        let error = ErrorInfo::new().with_name("Error").with_message("Ouch");
        let entry = build_entry_at(123, "test", Some(&base()), Topic::Error, error.into());

        assert_eq!(entry.data, Some(json!({"base": "data"})));
        assert_eq!(entry.stack.as_deref(), Some("Error: Ouch"));
    }

    #[test]
    fn test_error_like_data_value_is_treated_as_error() {
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Error,
            json!({
                "name": "SyntaxError",
                "message": "Ouch!",
                "stack": "SyntaxError: Ouch!\n  at xyz:123"
            })
            .into(),
        );

        assert_eq!(entry.data, None);
        assert_eq!(
            entry.stack.as_deref(),
            Some("SyntaxError: Ouch!\n  at xyz:123")
        );
    }

    #[test]
    fn test_name_message_object_is_data_not_error() {
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Error,
            json!({"name": "a", "message": "b"}).into(),
        );

        assert_eq!(entry.data, Some(json!({"name": "a", "message": "b"})));
        assert_eq!(entry.stack, None);
    }

    #[test]
    fn test_data_and_error() {
        let error = ErrorInfo::new().with_name("Error").with_message("Ouch!");
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Issue,
            ("Found", json!({"some": "issue"}), error).into(),
        );

        assert_eq!(entry.msg.as_deref(), Some("Found"));
        assert_eq!(entry.data, Some(json!({"some": "issue"})));
        assert_eq!(entry.stack.as_deref(), Some("Error: Ouch!"));
    }

    #[test]
    fn test_data_and_error_with_code() {
        let error = ErrorInfo::new()
            .with_name("Error")
            .with_message("Ouch!")
            .with_code("E_CODE");
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Issue,
            ("Found", json!({"some": "issue"}), error).into(),
        );

        assert_eq!(
            serde_json::to_string(&entry.data).unwrap(),
            "{\"some\":\"issue\",\"code\":\"E_CODE\"}"
        );
    }

    #[test]
    fn test_data_and_string_error() {
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Issue,
            (json!({"id": "worker-1"}), "Oh!").into(),
        );

        assert_eq!(entry.data, Some(json!({"id": "worker-1"})));
        assert_eq!(entry.stack.as_deref(), Some("Oh!"));
    }

    #[test]
    fn test_bare_string_data() {
        let entry = build_entry_at(
            123,
            "test",
            Some(&base()),
            Topic::Broadcast,
            ("Data", json!("Also string")).into(),
        );

        assert_eq!(entry.data, Some(json!("Also string")));
    }

    #[test]
    fn test_error_with_cause_and_code_on_cause() {
        let cause = ErrorInfo::new()
            .with_name("Error")
            .with_message("Cause")
            .with_code("E_CODE");
        let error = ErrorInfo::new()
            .with_name("Error")
            .with_message("Ouch!")
            .with_cause(cause);
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Error,
            ("Oups", error).into(),
        );

        assert_eq!(
            entry.to_json().unwrap(),
            "{\"ts\":123,\"ns\":\"test\",\"topic\":\"error\",\"msg\":\"Oups\",\
             \"data\":{\"cause\":{\"code\":\"E_CODE\"}},\
             \"stack\":\"Error: Ouch!\",\"cause\":\"Error: Cause\"}"
        );
    }

    #[test]
    fn test_data_with_error_cause_code_appends_after_data_keys() {
        let cause = ErrorInfo::new()
            .with_name("Error")
            .with_message("Cause")
            .with_code("E_CODE");
        let error = ErrorInfo::new()
            .with_name("Error")
            .with_message("Ouch!")
            .with_cause(cause);
        let entry = build_entry_at(
            123,
            "test",
            None,
            Topic::Error,
            (json!({"some": "data"}), error).into(),
        );

        assert_eq!(
            serde_json::to_string(&entry.data).unwrap(),
            "{\"some\":\"data\",\"cause\":{\"code\":\"E_CODE\"}}"
        );
    }
}
