//! Core entry construction and routing types

pub mod builder;
pub mod entry;
pub mod error;
pub mod error_info;
pub mod logger;
pub mod payload;
pub mod registry;
pub mod sink;
pub mod topic;

pub use builder::{build_entry, build_entry_at};
pub use entry::LogEntry;
pub use error::{LoggerError, Result};
pub use error_info::{attach_error, is_error_like, ErrorInfo, ErrorValue};
pub use logger::Logger;
pub use payload::Payload;
pub use registry::LogRegistry;
pub use sink::Sink;
pub use topic::Topic;
