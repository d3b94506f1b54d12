//! CSV transcript backend.
//!
//! One row per notification: `frame, source, line`.  The file doubles as a
//! regression artifact — two runs with the same seed and script produce
//! byte-identical transcripts.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use vt_building::NotificationSink;
use vt_core::Frame;

use crate::{OutputError, OutputResult};

/// A [`NotificationSink`] that appends every line to a CSV file.
///
/// `post` has no return value, so the first write error is stashed; callers
/// check with [`take_error`][Self::take_error] or let [`finish`][Self::finish]
/// report it.
pub struct CsvTranscript {
    writer: Writer<File>,
    finished: bool,
    last_error: Option<OutputError>,
}

impl CsvTranscript {
    /// Create (or truncate) the transcript file and write the header row.
    pub fn create(path: &Path) -> OutputResult<CsvTranscript> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["frame", "source", "line"])?;
        Ok(CsvTranscript {
            writer,
            finished: false,
            last_error: None,
        })
    }

    /// Take the stored write error (if any).  `None` means every post so far
    /// landed on disk.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the file.  Idempotent; returns the first stashed write error if
    /// one occurred during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(err) = self.last_error.take() {
            return Err(err);
        }
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn stash(&mut self, result: OutputResult<()>) {
        if let Err(err) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(err);
            }
        }
    }
}

impl NotificationSink for CsvTranscript {
    fn post(&mut self, frame: Frame, source: &str, line: std::fmt::Arguments<'_>) {
        let result = self
            .writer
            .write_record([&frame.0.to_string(), source, &line.to_string()])
            .map_err(OutputError::from);
        self.stash(result);
    }
}
