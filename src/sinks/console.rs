//! Console sink
//!
//! Runs every entry through a line formatter and writes the result to the
//! wrapped writer, one line per entry.

use crate::core::entry::LogEntry;
use crate::core::error::Result;
use crate::core::sink::Sink;
use crate::format::LineFormat;
use std::io::{self, Write};

/// Formatted text output over any writer.
pub struct ConsoleSink<W: Write + Send + Sync> {
    writer: W,
    format: Box<dyn LineFormat>,
}

impl<W: Write + Send + Sync> ConsoleSink<W> {
    pub fn new(writer: W, format: Box<dyn LineFormat>) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: Box<dyn LineFormat>) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send + Sync> Sink for ConsoleSink<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        writeln!(self.writer, "{}", self.format.format(entry))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
