//! In-memory sink for tests and inspection.

use crate::core::entry::LogEntry;
use crate::core::error::Result;
use crate::core::sink::Sink;
use parking_lot::RwLock;
use std::sync::Arc;

/// Collects entries into a shared vector. The second half of the pair
/// returned by [`MemorySink::new`] keeps access to the collected entries
/// after the sink itself has been handed to a registry.
pub struct MemorySink {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> (Self, Arc<RwLock<Vec<LogEntry>>>) {
        let entries = Arc::new(RwLock::new(Vec::new()));
        (
            Self {
                entries: Arc::clone(&entries),
            },
            entries,
        )
    }
}

impl Sink for MemorySink {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.write().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
