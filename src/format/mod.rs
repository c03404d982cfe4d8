//! Text formatting for log entries
//!
//! Two peer line formatters render a canonical entry into one terminal
//! line: [`BasicFormat`] (plain text) and [`FancyFormat`] (ANSI
//! decorated). Both are stateless transforms built on the shared value
//! formatter and scalar renderers.

pub mod basic;
pub mod decor;
pub mod fancy;
pub mod render;
pub mod value_format;

pub use basic::BasicFormat;
pub use decor::{AnsiDecor, NoDecor, TextDecor};
pub use fancy::FancyFormat;
pub use render::{FancyRender, PlainRender, ValueRender};
pub use value_format::value_format;

use crate::core::entry::LogEntry;

/// A stateless entry-to-line transform.
pub trait LineFormat: Send + Sync {
    /// Render one entry, without a trailing newline.
    fn format(&self, entry: &LogEntry) -> String;
}

/// How much of a stack trace to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackMode {
    /// No stack block at all.
    Off,
    /// First line only.
    Message,
    /// First line plus the first trace line.
    #[default]
    Peek,
    /// The whole trace.
    Full,
}

/// Per-formatter field toggles.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub ts: bool,
    pub topic: bool,
    pub ns: bool,
    pub data: bool,
    pub stack: StackMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            ts: true,
            topic: true,
            ns: true,
            data: true,
            stack: StackMode::Peek,
        }
    }
}

/// First line of a stack string, up to the first newline.
pub(crate) fn first_line(stack: &str) -> &str {
    match stack.find('\n') {
        Some(p) => &stack[..p],
        None => stack,
    }
}

/// Second line of a stack string, trimmed of surrounding whitespace.
pub(crate) fn peek_line(stack: &str) -> Option<&str> {
    let p1 = stack.find('\n')?;
    let rest = &stack[p1 + 1..];
    let line = match rest.find('\n') {
        Some(p2) => &rest[..p2],
        None => rest,
    };
    Some(line.trim())
}

/// Everything after the first line.
pub(crate) fn remainder(stack: &str) -> Option<&str> {
    stack.find('\n').map(|p| &stack[p + 1..])
}
