//! Floor numbering and building-shaft bounds.
//!
//! Floors are signed: a building with basements has a negative lowest floor.
//! All floor arithmetic in the framework goes through [`Floor`] so a raw
//! integer can never be confused with a frame count or a capacity value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{VtError, VtResult};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A single floor number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct Floor(pub i32);

impl Floor {
    /// The floor directly above this one.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below this one.
    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0 - 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// An inclusive span of reachable floors, `lowest ..= highest`.
///
/// Construction validates `lowest < highest`; a one-floor building is a
/// configuration error everywhere a range is required.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
pub struct FloorRange {
    pub lowest:  Floor,
    pub highest: Floor,
}

impl FloorRange {
    /// Build a range, rejecting `lowest >= highest`.
    pub fn new(lowest: Floor, highest: Floor) -> VtResult<FloorRange> {
        if lowest >= highest {
            return Err(VtError::InvalidFloorRange { lowest, highest });
        }
        Ok(FloorRange { lowest, highest })
    }

    /// Is `floor` inside the range (inclusive on both ends)?
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.lowest && floor <= self.highest
    }

    /// Number of floors in the range, counting both endpoints.
    #[inline]
    pub fn span(&self) -> usize {
        (self.highest.0 - self.lowest.0) as usize + 1
    }

    /// Zero-based index of `floor` within the range, for `Vec` storage
    /// where slot 0 is the lowest floor.
    ///
    /// # Panics
    /// Panics in debug mode when `floor` is outside the range.
    #[inline]
    pub fn slot(&self, floor: Floor) -> usize {
        debug_assert!(self.contains(floor), "{floor} outside {self:?}");
        (floor.0 - self.lowest.0) as usize
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lowest.0, self.highest.0)
    }
}
