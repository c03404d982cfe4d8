//! Canonical log entry
//!
//! The serde field order below is the wire key order: `ts`, `ns`, `topic`,
//! then the optional `msg`, `data`, `stack` and `cause` keys, which are
//! omitted entirely when absent.

use super::topic::Topic;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since epoch, set at construction time.
    pub ts: i64,

    /// Namespace, a space-joined hierarchy such as `"parent child"`.
    pub ns: String,

    pub topic: Topic,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub msg: Option<String>,

    /// Usually a JSON object with insertion-ordered keys; bare values are
    /// allowed when the caller logs a plain string or number as data.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,

    /// Canonical stack string of the primary error.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stack: Option<String>,

    /// Canonical stack string of the error's cause. Only ever present
    /// together with `stack`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cause: Option<String>,
}

impl LogEntry {
    pub fn new(ts: i64, ns: impl Into<String>, topic: Topic) -> Self {
        Self {
            ts,
            ns: ns.into(),
            topic,
            msg: None,
            data: None,
            stack: None,
            cause: None,
        }
    }

    /// Serialize to a single-line JSON string in the fixed wire key order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
