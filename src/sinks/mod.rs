//! Output sinks
//!
//! A sink accepts one entry at a time, in call order, and owns
//! serialization and transport. [`NdjsonSink`] writes the machine-readable
//! wire format, [`ConsoleSink`] writes formatted terminal lines and
//! [`MemorySink`] collects entries for inspection in tests.

pub mod console;
pub mod memory;
pub mod ndjson;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use ndjson::NdjsonSink;
