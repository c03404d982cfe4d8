//! Topic definitions
//!
//! Every log call is tagged with one of a fixed set of topics. Each topic
//! has a display glyph used by the text formatters; the wire format carries
//! the lowercase topic name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Ok,
    Warn,
    Error,
    Issue,
    Ignore,
    Input,
    Output,
    Send,
    Receive,
    Fetch,
    Finish,
    Launch,
    Terminate,
    Spawn,
    Broadcast,
    Disk,
    Timing,
    Money,
    Numbers,
    Wtf,
}

impl Topic {
    /// All topics, in display order.
    pub const ALL: [Topic; 20] = [
        Topic::Ok,
        Topic::Warn,
        Topic::Error,
        Topic::Issue,
        Topic::Ignore,
        Topic::Input,
        Topic::Output,
        Topic::Send,
        Topic::Receive,
        Topic::Fetch,
        Topic::Finish,
        Topic::Launch,
        Topic::Terminate,
        Topic::Spawn,
        Topic::Broadcast,
        Topic::Disk,
        Topic::Timing,
        Topic::Money,
        Topic::Numbers,
        Topic::Wtf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Ok => "ok",
            Topic::Warn => "warn",
            Topic::Error => "error",
            Topic::Issue => "issue",
            Topic::Ignore => "ignore",
            Topic::Input => "input",
            Topic::Output => "output",
            Topic::Send => "send",
            Topic::Receive => "receive",
            Topic::Fetch => "fetch",
            Topic::Finish => "finish",
            Topic::Launch => "launch",
            Topic::Terminate => "terminate",
            Topic::Spawn => "spawn",
            Topic::Broadcast => "broadcast",
            Topic::Disk => "disk",
            Topic::Timing => "timing",
            Topic::Money => "money",
            Topic::Numbers => "numbers",
            Topic::Wtf => "wtf",
        }
    }

    /// Display glyph for the text formatters.
    ///
    /// The `warn` and `timing` glyphs carry a trailing pad because the
    /// underlying emoji render narrow in most terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            Topic::Ok => "✅",
            Topic::Warn => "⚠️ ",
            Topic::Error => "🚨",
            Topic::Issue => "🐛",
            Topic::Ignore => "🙈",
            Topic::Input => "🔺",
            Topic::Output => "🔻",
            Topic::Send => "📤",
            Topic::Receive => "📥",
            Topic::Fetch => "📡",
            Topic::Finish => "🏁",
            Topic::Launch => "🚀",
            Topic::Terminate => "⛔️",
            Topic::Spawn => "✨",
            Topic::Broadcast => "📣",
            Topic::Disk => "💾",
            Topic::Timing => "⏱ ",
            Topic::Money => "💰",
            Topic::Numbers => "🔢",
            Topic::Wtf => "👻",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid topic: '{}'", s))
    }
}
