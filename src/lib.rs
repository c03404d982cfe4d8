//! # Topic Log
//!
//! A structured logging facade built around topics instead of severity
//! levels. Application code requests a namespaced logger from a registry
//! and emits topic calls (`ok`, `warn`, `error`, `timing`, ...); the
//! library assembles canonical entries, enriches them with error and
//! cause metadata, and routes them through a single pluggable sink that
//! serializes to NDJSON or formatted terminal lines.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use topic_log::prelude::*;
//!
//! let registry = LogRegistry::new();
//! let (sink, entries) = MemorySink::new();
//! registry.set_sink(Box::new(sink));
//!
//! let log = registry.logger("account");
//! log.launch("Signup flow");
//! log.numbers(("Quota", json!({ "bytes_used": 1536 })));
//!
//! assert_eq!(entries.read().len(), 2);
//! ```

pub mod core;
pub mod format;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{ErrorInfo, LogEntry, LogRegistry, Logger, LoggerError, Payload, Result, Sink, Topic};
    pub use crate::format::{BasicFormat, FancyFormat, FormatOptions, LineFormat, StackMode};
    pub use crate::sinks::{ConsoleSink, MemorySink, NdjsonSink};
}

pub use crate::core::{
    attach_error, build_entry, build_entry_at, is_error_like, ErrorInfo, ErrorValue, LogEntry,
    LogRegistry, Logger, LoggerError, Payload, Result, Sink, Topic,
};
pub use crate::format::{
    value_format, AnsiDecor, BasicFormat, FancyFormat, FancyRender, FormatOptions, LineFormat,
    NoDecor, PlainRender, StackMode, TextDecor, ValueRender,
};
pub use crate::sinks::{ConsoleSink, MemorySink, NdjsonSink};
