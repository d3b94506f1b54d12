//! Simulation frame counter.
//!
//! All timing in the framework — door-hold duration, inter-floor travel — is
//! expressed in frames, never wall-clock time.  The outer application shell
//! decides how long one frame takes in real time; the core only counts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute simulation frame counter.
///
/// Stored as `u64`: at one frame per millisecond a u64 lasts far longer than
/// any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame after this one.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }

    /// Frames elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
