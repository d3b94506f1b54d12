//! Per-floor waiting lines.
//!
//! One bounded queue per floor, slot 0 = lowest floor.  Ordinary arrivals
//! respect the bound (the caller drops the occupant when full); privileged
//! events force their responder in, evicting the front of the line.

use std::collections::VecDeque;

use vt_core::{Floor, FloorRange};
use vt_occupant::Occupant;

/// The ordered occupant queues for every floor of the building.
#[derive(Debug)]
pub struct FloorQueues {
    queues: Vec<VecDeque<Occupant>>,
    range: FloorRange,
    max_per_floor: usize,
}

impl FloorQueues {
    pub fn new(range: FloorRange, max_per_floor: usize) -> FloorQueues {
        FloorQueues {
            queues: (0..range.span()).map(|_| VecDeque::new()).collect(),
            range,
            max_per_floor,
        }
    }

    /// Can one more occupant wait on `floor`?  `false` for out-of-range
    /// floors.
    pub fn has_room(&self, floor: Floor) -> bool {
        self.range.contains(floor) && self.queues[self.range.slot(floor)].len() < self.max_per_floor
    }

    /// Append an occupant to its origin floor's queue; gives the occupant
    /// back when the floor is full.
    pub fn enqueue(&mut self, occupant: Occupant) -> Result<(), Occupant> {
        let floor = occupant.origin();
        if !self.has_room(floor) {
            return Err(occupant);
        }
        self.queues[self.range.slot(floor)].push_back(occupant);
        Ok(())
    }

    /// Append unconditionally, evicting the front occupant when the floor is
    /// full.  Returns the evicted occupant, if any.
    pub fn force_enqueue(&mut self, occupant: Occupant) -> Option<Occupant> {
        let slot = self.range.slot(occupant.origin());
        let queue = &mut self.queues[slot];
        let evicted = if queue.len() >= self.max_per_floor {
            queue.pop_front()
        } else {
            None
        };
        queue.push_back(occupant);
        evicted
    }

    /// Empty every floor (fire evacuation by stairs).  Returns how many
    /// occupants were cleared.
    pub fn clear_all(&mut self) -> usize {
        let mut cleared = 0;
        for queue in &mut self.queues {
            cleared += queue.len();
            queue.clear();
        }
        cleared
    }

    pub fn len_at(&self, floor: Floor) -> usize {
        if !self.range.contains(floor) {
            return 0;
        }
        self.queues[self.range.slot(floor)].len()
    }

    pub fn total_waiting(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// The queue for one floor.  Panics on out-of-range floors (callers
    /// always hold a car whose current floor is in the building).
    pub fn queue(&self, floor: Floor) -> &VecDeque<Occupant> {
        &self.queues[self.range.slot(floor)]
    }

    /// Remove and return the occupant at `idx` in `floor`'s queue.
    pub fn remove_at(&mut self, floor: Floor, idx: usize) -> Option<Occupant> {
        self.queues[self.range.slot(floor)].remove(idx)
    }

    /// Re-insert an occupant at `idx` (a boarding attempt that bounced).
    pub fn insert_at(&mut self, floor: Floor, idx: usize, occupant: Occupant) {
        self.queues[self.range.slot(floor)].insert(idx, occupant);
    }
}
