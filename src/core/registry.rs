//! Log registry
//!
//! The explicitly constructed context object owning the logger table, the
//! single pluggable sink and the mute tables. There is no process-global
//! state; applications create a registry and pass it (or cloned handles)
//! where logging is needed.

use super::builder::build_entry;
use super::entry::LogEntry;
use super::error_info::ErrorInfo;
use super::logger::Logger;
use super::payload::Payload;
use super::sink::Sink;
use super::topic::Topic;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Namespace of the synthetic entry reporting a sink failure.
const INTERNAL_NS: &str = "logger";

pub(crate) struct Shared {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    sink: RwLock<Option<Box<dyn Sink>>>,
    muted: RwLock<HashMap<String, Vec<Topic>>>,
    muted_all: RwLock<Vec<Topic>>,
    /// Re-entrancy guard: true while a sink failure is being reported.
    reporting: AtomicBool,
}

impl Shared {
    fn new() -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            sink: RwLock::new(None),
            muted: RwLock::new(HashMap::new()),
            muted_all: RwLock::new(Vec::new()),
            reporting: AtomicBool::new(false),
        }
    }

    pub(crate) fn intern(
        self: &Arc<Self>,
        ns: &str,
        data: Option<Map<String, Value>>,
    ) -> Arc<Logger> {
        let logger = {
            let mut loggers = self.loggers.write();
            loggers
                .entry(ns.to_string())
                .or_insert_with(|| Arc::new(Logger::new(ns, Arc::clone(self))))
                .clone()
        };
        // Every request replaces the base data wholesale, including with
        // nothing.
        logger.set_base_data(data);
        logger
    }

    pub(crate) fn mute(&self, ns: &str, topics: &[Topic]) {
        self.muted.write().insert(ns.to_string(), topics.to_vec());
    }

    pub(crate) fn mute_all(&self, topics: &[Topic]) {
        *self.muted_all.write() = topics.to_vec();
    }

    fn is_muted(&self, ns: &str, topic: Topic) -> bool {
        if let Some(topics) = self.muted.read().get(ns) {
            if topics.is_empty() || topics.contains(&topic) {
                return true;
            }
        }
        self.muted_all.read().contains(&topic)
    }

    pub(crate) fn write(
        &self,
        ns: &str,
        base_data: Option<&Map<String, Value>>,
        topic: Topic,
        payload: Payload,
    ) {
        if self.is_muted(ns, topic) {
            return;
        }
        let mut guard = self.sink.write();
        let Some(sink) = guard.as_mut() else {
            // No sink installed: topic calls are no-ops.
            return;
        };
        let entry = build_entry(ns, base_data, topic, payload);
        self.dispatch(sink.as_mut(), &entry);
    }

    fn dispatch(&self, sink: &mut dyn Sink, entry: &LogEntry) {
        if let Err(err) = sink.append(entry) {
            // Report the failure once through the same sink. If that
            // report fails as well, it is silently dropped.
            if !self.reporting.swap(true, Ordering::SeqCst) {
                let report = build_entry(
                    INTERNAL_NS,
                    None,
                    Topic::Error,
                    Payload::msg_error("Transform failed", ErrorInfo::from_error(&err)),
                );
                let _ = sink.append(&report);
                self.reporting.store(false, Ordering::SeqCst);
            }
        }
    }
}

/// The log context: interned loggers plus the installed sink.
#[derive(Clone)]
pub struct LogRegistry {
    shared: Arc<Shared>,
}

impl LogRegistry {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared::new()),
        }
    }

    /// Request the logger for `ns`, clearing any base data.
    pub fn logger(&self, ns: &str) -> Arc<Logger> {
        self.shared.intern(ns, None)
    }

    /// Request the logger for `ns` and replace its base data.
    pub fn logger_with(&self, ns: &str, data: Map<String, Value>) -> Arc<Logger> {
        self.shared.intern(ns, Some(data))
    }

    /// Install the sink. Replaces any previously installed sink.
    pub fn set_sink(&self, sink: Box<dyn Sink>) {
        *self.shared.sink.write() = Some(sink);
    }

    /// Detach and return the installed sink, if any.
    pub fn take_sink(&self) -> Option<Box<dyn Sink>> {
        self.shared.sink.write().take()
    }

    pub fn has_sink(&self) -> bool {
        self.shared.sink.read().is_some()
    }

    /// Flush the installed sink.
    pub fn flush(&self) -> super::error::Result<()> {
        if let Some(sink) = self.shared.sink.write().as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Mute topics for a namespace. An empty topic list mutes every topic.
    pub fn mute(&self, ns: &str, topics: &[Topic]) {
        self.shared.mute(ns, topics);
    }

    /// Mute topics across every namespace.
    pub fn mute_all(&self, topics: &[Topic]) {
        self.shared.mute_all(topics);
    }

    /// Clear interned loggers and mutes and detach the sink. Entries
    /// already handed to the sink are not recalled.
    pub fn reset(&self) {
        self.shared.loggers.write().clear();
        self.shared.muted.write().clear();
        self.shared.muted_all.write().clear();
        *self.shared.sink.write() = None;
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}
