//! Call payloads
//!
//! Topic calls accept any combination of a message, a data value and an
//! error. `Payload` makes the shape explicit as a tagged union; `From`
//! conversions keep call sites terse.

use super::error_info::{ErrorInfo, ErrorValue};
use serde_json::{Map, Value};

/// The resolved argument shape of a single topic call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Msg(String),
    MsgData(String, Value),
    MsgDataError(String, Value, ErrorValue),
    MsgError(String, ErrorValue),
    Data(Value),
    DataError(Value, ErrorValue),
    Error(ErrorValue),
}

impl Payload {
    pub fn msg(msg: impl Into<String>) -> Self {
        Payload::Msg(msg.into())
    }

    pub fn msg_data(msg: impl Into<String>, data: impl Into<Value>) -> Self {
        Payload::MsgData(msg.into(), data.into())
    }

    pub fn msg_data_error(
        msg: impl Into<String>,
        data: impl Into<Value>,
        error: impl Into<ErrorValue>,
    ) -> Self {
        Payload::MsgDataError(msg.into(), data.into(), error.into())
    }

    pub fn msg_error(msg: impl Into<String>, error: impl Into<ErrorValue>) -> Self {
        Payload::MsgError(msg.into(), error.into())
    }

    pub fn data(data: impl Into<Value>) -> Self {
        Payload::Data(data.into())
    }

    pub fn data_error(data: impl Into<Value>, error: impl Into<ErrorValue>) -> Self {
        Payload::DataError(data.into(), error.into())
    }

    pub fn error(error: impl Into<ErrorValue>) -> Self {
        Payload::Error(error.into())
    }

    /// Split into the (message, data, error) slots the entry builder
    /// resolves.
    pub(crate) fn into_parts(self) -> (Option<String>, Option<Value>, Option<ErrorValue>) {
        match self {
            Payload::Empty => (None, None, None),
            Payload::Msg(msg) => (Some(msg), None, None),
            Payload::MsgData(msg, data) => (Some(msg), Some(data), None),
            Payload::MsgDataError(msg, data, error) => (Some(msg), Some(data), Some(error)),
            Payload::MsgError(msg, error) => (Some(msg), None, Some(error)),
            Payload::Data(data) => (None, Some(data), None),
            Payload::DataError(data, error) => (None, Some(data), Some(error)),
            Payload::Error(error) => (None, None, Some(error)),
        }
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Empty
    }
}

impl From<&str> for Payload {
    fn from(msg: &str) -> Self {
        Payload::Msg(msg.to_string())
    }
}

impl From<String> for Payload {
    fn from(msg: String) -> Self {
        Payload::Msg(msg)
    }
}

impl From<Value> for Payload {
    fn from(data: Value) -> Self {
        Payload::Data(data)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(data: Map<String, Value>) -> Self {
        Payload::Data(Value::Object(data))
    }
}

impl From<ErrorInfo> for Payload {
    fn from(error: ErrorInfo) -> Self {
        Payload::Error(ErrorValue::Info(error))
    }
}

impl From<ErrorValue> for Payload {
    fn from(error: ErrorValue) -> Self {
        Payload::Error(error)
    }
}

impl From<(&str, Value)> for Payload {
    fn from((msg, data): (&str, Value)) -> Self {
        Payload::msg_data(msg, data)
    }
}

impl From<(String, Value)> for Payload {
    fn from((msg, data): (String, Value)) -> Self {
        Payload::MsgData(msg, data)
    }
}

impl From<(&str, ErrorInfo)> for Payload {
    fn from((msg, error): (&str, ErrorInfo)) -> Self {
        Payload::msg_error(msg, error)
    }
}

impl From<(String, ErrorInfo)> for Payload {
    fn from((msg, error): (String, ErrorInfo)) -> Self {
        Payload::msg_error(msg, error)
    }
}

impl From<(&str, Value, ErrorInfo)> for Payload {
    fn from((msg, data, error): (&str, Value, ErrorInfo)) -> Self {
        Payload::msg_data_error(msg, data, error)
    }
}

impl From<(String, Value, ErrorInfo)> for Payload {
    fn from((msg, data, error): (String, Value, ErrorInfo)) -> Self {
        Payload::msg_data_error(msg, data, error)
    }
}

impl From<(&str, Value, &str)> for Payload {
    fn from((msg, data, error): (&str, Value, &str)) -> Self {
        Payload::msg_data_error(msg, data, error)
    }
}

impl From<(Value, ErrorInfo)> for Payload {
    fn from((data, error): (Value, ErrorInfo)) -> Self {
        Payload::data_error(data, error)
    }
}

impl From<(Value, &str)> for Payload {
    fn from((data, error): (Value, &str)) -> Self {
        Payload::data_error(data, error)
    }
}
