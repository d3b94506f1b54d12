//! The shared request ledger.
//!
//! The ledger is an explicit value owned by the building and passed by
//! reference into every car's `advance`, never global state, so independent
//! simulations never interfere and the disjointness invariant has a single
//! enforcement site.
//!
//! # Invariants
//!
//! - A floor appears in at most one of `pending` / `claimed` at a time.
//! - A fulfilled claim is removed outright, never re-queued.
//! - Claims are floor-level, not per-direction: a car headed to a floor for
//!   an up-bound rider is also credited with any down-bound request there.

use vt_core::{Floor, FloorRange};

/// Building-wide record of outstanding floor requests and which of them a
/// car is actively traveling to serve.
#[derive(Default, Debug)]
pub struct RequestLedger {
    /// Requests not yet claimed, oldest first.
    pending: Vec<Floor>,
    /// Requests a car is currently heading for.
    claimed: Vec<Floor>,
}

impl RequestLedger {
    pub fn new() -> RequestLedger {
        RequestLedger::default()
    }

    /// Record a floor request.  Returns `false` (and changes nothing) when
    /// the floor is already pending or claimed — a rider pressing the button
    /// twice is not two requests.
    pub fn submit(&mut self, floor: Floor) -> bool {
        if self.is_tracked(floor) {
            return false;
        }
        self.pending.push(floor);
        self.debug_check();
        true
    }

    /// Claim the oldest pending request within `range`: the floor moves from
    /// pending to claimed and is returned.  `None` when nothing in range is
    /// waiting.
    pub fn claim_next(&mut self, range: FloorRange) -> Option<Floor> {
        let idx = self.pending.iter().position(|&f| range.contains(f))?;
        let floor = self.pending.remove(idx);
        self.claimed.push(floor);
        self.debug_check();
        Some(floor)
    }

    /// Mark a claimed floor as served.  The floor is removed outright.
    pub fn release(&mut self, floor: Floor) {
        self.claimed.retain(|&f| f != floor);
    }

    /// Drop a pending request without claiming it (the rider boarded some
    /// other way).  Returns whether anything was removed.
    pub fn remove_pending(&mut self, floor: Floor) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&f| f != floor);
        before != self.pending.len()
    }

    /// Is there an outstanding (pending or claimed) request at `floor`?
    /// Drives the pass-through decision while a car is moving.
    pub fn has_request_at(&self, floor: Floor) -> bool {
        self.is_tracked(floor)
    }

    pub fn is_tracked(&self, floor: Floor) -> bool {
        self.pending.contains(&floor) || self.claimed.contains(&floor)
    }

    pub fn pending(&self) -> &[Floor] {
        &self.pending
    }

    pub fn claimed(&self) -> &[Floor] {
        &self.claimed
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.claimed.is_empty()
    }

    fn debug_check(&self) {
        debug_assert!(
            !self.pending.iter().any(|f| self.claimed.contains(f)),
            "floor in both pending and claimed: {:?} / {:?}",
            self.pending,
            self.claimed
        );
    }
}
