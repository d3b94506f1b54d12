//! Fan a notification stream out to two sinks.

use std::fmt;

use vt_building::NotificationSink;
use vt_core::Frame;

/// Posts every line to both inner sinks, in order.  Typical use is console
/// plus transcript for a live run.
pub struct TeeSink<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> TeeSink<A, B> {
    pub fn new(first: A, second: B) -> TeeSink<A, B> {
        TeeSink { first, second }
    }
}

impl<A: NotificationSink, B: NotificationSink> NotificationSink for TeeSink<A, B> {
    fn post(&mut self, frame: Frame, source: &str, line: fmt::Arguments<'_>) {
        self.first.post(frame, source, line);
        self.second.post(frame, source, line);
    }
}
