//! NDJSON sink
//!
//! Serializes every entry to one JSON object per line, keys in the fixed
//! wire order, and writes it to the wrapped writer.

use crate::core::entry::LogEntry;
use crate::core::error::Result;
use crate::core::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Newline-delimited JSON over any writer.
pub struct NdjsonSink<W: Write + Send + Sync> {
    writer: W,
}

impl<W: Write + Send + Sync> NdjsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl NdjsonSink<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl NdjsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> Sink for NdjsonSink<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let json = entry.to_json()?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "ndjson"
    }
}
