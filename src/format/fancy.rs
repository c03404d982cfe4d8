//! Decorated line formatter
//!
//! Renders an entry for an interactive terminal: dimmed local time, topic
//! glyph, colored namespace, highlighted data values and an attention
//! style on the first line of a stack trace. All styling goes through an
//! injected [`TextDecor`], so the formatter itself stays testable.

use super::decor::{AnsiDecor, TextDecor};
use super::render::{FancyRender, ValueRender};
use super::value_format::value_format;
use super::{first_line, peek_line, remainder, FormatOptions, LineFormat, StackMode};
use crate::core::entry::LogEntry;
use chrono::{Local, TimeZone};
use serde_json::Value;

/// ANSI-decorated line formatter.
pub struct FancyFormat {
    opts: FormatOptions,
    decor: Box<dyn TextDecor>,
}

impl FancyFormat {
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    pub fn with_options(opts: FormatOptions) -> Self {
        Self {
            opts,
            decor: Box::new(AnsiDecor),
        }
    }

    /// Swap out the decorator, e.g. for non-terminal output.
    pub fn with_decor(mut self, decor: Box<dyn TextDecor>) -> Self {
        self.decor = decor;
        self
    }

    fn push_data(&self, parts: &mut Vec<String>, data: &Value) {
        let render = FancyRender::new(self.decor.as_ref());
        match data {
            Value::Object(map) => {
                for (key, value) in map {
                    let (label, rendered, unit) = value_format(key, value, &render);
                    let highlighted = if unit.is_empty() {
                        rendered
                    } else {
                        format!("{}{}", self.decor.yellow(&rendered), unit)
                    };
                    if label.is_empty() {
                        parts.push(highlighted);
                    } else {
                        parts.push(format!("{}={}", self.decor.bold(&label), highlighted));
                    }
                }
            }
            other => parts.push(render.render(other)),
        }
    }

    fn format_stack(&self, mode: StackMode, stack: &str) -> String {
        let head = self.decor.alert(first_line(stack));
        match mode {
            StackMode::Message => head,
            StackMode::Full => match remainder(stack) {
                Some(rest) => format!("{}\n{}", head, self.decor.gray(rest)),
                None => head,
            },
            _ => match peek_line(stack) {
                Some(peek) => format!("{} {}", head, self.decor.gray(peek)),
                None => head,
            },
        }
    }
}

impl Default for FancyFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormat for FancyFormat {
    fn format(&self, entry: &LogEntry) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.opts.ts {
            parts.push(self.decor.gray(&local_time(entry.ts)));
        }
        if self.opts.topic {
            parts.push(entry.topic.glyph().to_string());
        }
        if self.opts.ns {
            parts.push(self.decor.blue(&entry.ns));
        }
        if let Some(msg) = &entry.msg {
            parts.push(msg.clone());
        }
        if self.opts.data {
            if let Some(data) = &entry.data {
                self.push_data(&mut parts, data);
            }
        }
        if self.opts.stack != StackMode::Off {
            if let Some(stack) = &entry.stack {
                parts.push(self.format_stack(self.opts.stack, stack));
            }
        }
        let mut line = parts.join(" ");
        if self.opts.stack != StackMode::Off {
            if let (Some(_), Some(cause)) = (&entry.stack, &entry.cause) {
                line.push_str(&format!(
                    "\n  {} {}",
                    self.decor.magenta("caused by"),
                    self.format_stack(self.opts.stack, cause)
                ));
            }
        }
        line
    }
}

/// Wall-clock time of day in the local timezone.
fn local_time(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}
