//! Sink trait for log output destinations
//!
//! The registry hands every constructed entry to exactly one sink. The
//! sink owns serialization and transport.

use super::{entry::LogEntry, error::Result};

pub trait Sink: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
