//! Logger handle
//!
//! A `Logger` is a lightweight handle bound to a namespace and optional
//! base data. Handles are interned by the registry: requesting the same
//! namespace twice yields the same `Arc`. The per-topic methods are
//! generated from the topic table at compile time; they all funnel into
//! the generic [`Logger::log`] entry point.

use super::payload::Payload;
use super::registry::Shared;
use super::topic::Topic;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct Logger {
    ns: String,
    data: RwLock<Option<Map<String, Value>>>,
    shared: Arc<Shared>,
}

macro_rules! topic_methods {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            pub fn $name(&self, payload: impl Into<Payload>) {
                self.log(Topic::$variant, payload);
            }
        )*
    };
}

impl Logger {
    pub(crate) fn new(ns: impl Into<String>, shared: Arc<Shared>) -> Self {
        Self {
            ns: ns.into(),
            data: RwLock::new(None),
            shared,
        }
    }

    pub fn ns(&self) -> &str {
        &self.ns
    }

    /// The base data merged into every entry built through this handle.
    pub fn base_data(&self) -> Option<Map<String, Value>> {
        self.data.read().clone()
    }

    /// Replaces the base data wholesale.
    pub(crate) fn set_base_data(&self, data: Option<Map<String, Value>>) {
        *self.data.write() = data;
    }

    /// Generic entry point: build an entry for `topic` and hand it to the
    /// registry's sink. A no-op when no sink is installed or the
    /// namespace/topic is muted.
    pub fn log(&self, topic: Topic, payload: impl Into<Payload>) {
        let base = self.data.read().clone();
        self.shared.write(&self.ns, base.as_ref(), topic, payload.into());
    }

    /// Derive a child handle with namespace `"{self} {suffix}"` carrying
    /// this logger's base data.
    pub fn child(&self, suffix: &str) -> Arc<Logger> {
        self.derive(suffix, None)
    }

    /// Derive a child handle whose base data is the shallow merge of this
    /// logger's base data and `data` (child keys win).
    pub fn child_with(&self, suffix: &str, data: Map<String, Value>) -> Arc<Logger> {
        self.derive(suffix, Some(data))
    }

    fn derive(&self, suffix: &str, data: Option<Map<String, Value>>) -> Arc<Logger> {
        let merged = match (self.data.read().clone(), data) {
            (Some(mut parent), Some(child)) => {
                for (key, value) in child {
                    parent.insert(key, value);
                }
                Some(parent)
            }
            (Some(parent), None) => Some(parent),
            (None, child) => child,
        };
        self.shared
            .intern(&format!("{} {}", self.ns, suffix), merged)
    }

    /// Mute this namespace. An empty topic list mutes every topic.
    pub fn mute(&self, topics: &[Topic]) {
        self.shared.mute(&self.ns, topics);
    }

    topic_methods! {
        ok => Ok,
        warn => Warn,
        error => Error,
        issue => Issue,
        ignore => Ignore,
        input => Input,
        output => Output,
        send => Send,
        receive => Receive,
        fetch => Fetch,
        finish => Finish,
        launch => Launch,
        terminate => Terminate,
        spawn => Spawn,
        broadcast => Broadcast,
        disk => Disk,
        timing => Timing,
        money => Money,
        numbers => Numbers,
        wtf => Wtf,
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("ns", &self.ns)
            .field("data", &*self.data.read())
            .finish()
    }
}
