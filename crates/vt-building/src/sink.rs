//! Notification sink for human-readable state-transition lines.
//!
//! Every notification is routed through an injectable sink rather than
//! printed inline, so the state machines are testable without capturing text
//! output.  Delivery is best-effort and fire-and-forget: the core never
//! depends on sink health or buffering.

use std::fmt;

use vt_core::Frame;

/// Receives one line per state transition.
///
/// The default body drops the line, so [`NoopSink`] is just an empty impl.
pub trait NotificationSink {
    fn post(&mut self, frame: Frame, source: &str, line: fmt::Arguments<'_>) {
        let _ = (frame, source, line);
    }
}

/// A sink that discards everything.
pub struct NoopSink;

impl NotificationSink for NoopSink {}

/// Prints each line to stdout, prefixed with the frame and source.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn post(&mut self, frame: Frame, source: &str, line: fmt::Arguments<'_>) {
        println!("[{frame}] {source}: {line}");
    }
}

/// Collects formatted lines in memory.  Used by tests to assert on the
/// notification stream.
#[derive(Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    /// Does any recorded line contain `needle`?
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl NotificationSink for MemorySink {
    fn post(&mut self, frame: Frame, source: &str, line: fmt::Arguments<'_>) {
        self.lines.push(format!("[{frame}] {source}: {line}"));
    }
}
