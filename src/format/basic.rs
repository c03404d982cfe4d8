//! Plain-text line formatter
//!
//! Renders an entry as a single undecorated line: ISO timestamp, topic
//! glyph, bracketed namespace, message, `key=value` data fields and an
//! optional stack block. Suitable for files and non-terminal output.

use super::render::{iso_millis, PlainRender, ValueRender};
use super::value_format::value_format;
use super::{first_line, peek_line, FormatOptions, LineFormat, StackMode};
use crate::core::entry::LogEntry;
use serde_json::Value;

/// Undecorated line formatter.
#[derive(Debug, Default, Clone)]
pub struct BasicFormat {
    opts: FormatOptions,
}

impl BasicFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: FormatOptions) -> Self {
        Self { opts }
    }
}

impl LineFormat for BasicFormat {
    fn format(&self, entry: &LogEntry) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.opts.ts {
            parts.push(iso_millis(entry.ts));
        }
        if self.opts.topic {
            parts.push(entry.topic.glyph().to_string());
        }
        if self.opts.ns {
            parts.push(format!("[{}]", entry.ns));
        }
        if let Some(msg) = &entry.msg {
            parts.push(msg.clone());
        }
        if self.opts.data {
            if let Some(data) = &entry.data {
                push_data(&mut parts, data);
            }
        }
        if self.opts.stack != StackMode::Off {
            if let Some(stack) = &entry.stack {
                parts.push(format_stack(self.opts.stack, stack));
            }
        }
        let mut line = parts.join(" ");
        if self.opts.stack != StackMode::Off {
            if let (Some(_), Some(cause)) = (&entry.stack, &entry.cause) {
                line.push_str("\n  caused by ");
                line.push_str(&format_stack(self.opts.stack, cause));
            }
        }
        line
    }
}

fn push_data(parts: &mut Vec<String>, data: &Value) {
    let render = PlainRender;
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                let (label, rendered, unit) = value_format(key, value, &render);
                if label.is_empty() {
                    parts.push(format!("{}{}", rendered, unit));
                } else {
                    parts.push(format!("{}={}{}", label, rendered, unit));
                }
            }
        }
        other => parts.push(render.render(other)),
    }
}

fn format_stack(mode: StackMode, stack: &str) -> String {
    match mode {
        StackMode::Full => stack.to_string(),
        StackMode::Message => first_line(stack).to_string(),
        _ => match peek_line(stack) {
            Some(peek) => format!("{} {}", first_line(stack), peek),
            None => first_line(stack).to_string(),
        },
    }
}
