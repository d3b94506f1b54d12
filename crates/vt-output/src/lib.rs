//! `vt-output` — transcript recording for the rust_vt framework.
//!
//! The dispatch core narrates itself through `NotificationSink`; this crate
//! provides sinks that persist that narration:
//!
//! | Sink              | Destination                                   |
//! |-------------------|-----------------------------------------------|
//! | [`CsvTranscript`] | `transcript.csv` (frame, source, line)        |
//! | [`TeeSink`]       | fans one stream out to two other sinks        |
//!
//! Sink methods have no return value, so write failures are stashed and
//! surfaced after the run:
//!
//! ```rust,ignore
//! let mut transcript = CsvTranscript::create(dir.join("transcript.csv"))?;
//! for _ in 0..total_frames {
//!     building.operate(&mut transcript);
//! }
//! transcript.finish()?;
//! ```

pub mod error;
pub mod tee;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use tee::TeeSink;
pub use transcript::CsvTranscript;
