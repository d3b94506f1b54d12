//! The `Occupant` — a rider and request-originator.
//!
//! An occupant is created by a building event, waits in a floor queue, boards
//! a car, rides toward its destination, and is destroyed when it disembarks.
//! While on board it runs one frame of behavior per simulation frame: the
//! sickness check, which may — exactly once — truncate the trip to the next
//! floor in the original direction of travel.

use vt_core::{Direction, Floor, FloorRange, OccupantId, SimRng};

use crate::{OccupantError, OccupantKind, OccupantResult};

#[derive(Clone, Debug)]
pub struct Occupant {
    id:       OccupantId,
    kind:     OccupantKind,
    priority: u8,
    footprint: u32,

    origin:      Floor,
    current:     Floor,
    destination: Floor,
    /// Direction of the original trip, fixed at creation.
    destination_direction: Direction,

    floors_traveled: u32,
    sick:            bool,
    sick_floor_applied: bool,
    on_board:        bool,
}

impl Occupant {
    /// Fabricate an occupant at `origin` with a randomly drawn destination.
    ///
    /// Destination selection tries three random floors in the range, keeping
    /// the first that differs from `origin`; if all three collide (plausible
    /// when the range is one floor tall), the destination is forced to the
    /// adjacent floor.
    pub fn spawn(
        id:        OccupantId,
        kind:      OccupantKind,
        priority:  u8,
        footprint: u32,
        origin:    Floor,
        range:     FloorRange,
        rng:       &mut SimRng,
    ) -> OccupantResult<Occupant> {
        let destination = draw_destination(origin, range, rng);
        Occupant::with_destination(id, kind, priority, footprint, origin, destination, range)
    }

    /// Fully explicit constructor, used by scripted scenarios and the fire
    /// handler (a firefighter's destination is the floor on fire, never
    /// random).
    pub fn with_destination(
        id:          OccupantId,
        kind:        OccupantKind,
        priority:    u8,
        footprint:   u32,
        origin:      Floor,
        destination: Floor,
        range:       FloorRange,
    ) -> OccupantResult<Occupant> {
        if footprint == 0 {
            return Err(OccupantError::ZeroFootprint);
        }
        if !range.contains(origin) {
            return Err(OccupantError::OriginOutOfRange { origin, range });
        }
        if !range.contains(destination) {
            return Err(OccupantError::DestinationOutOfRange { destination, range });
        }

        Ok(Occupant {
            id,
            kind,
            priority,
            footprint,
            origin,
            current: origin,
            destination,
            destination_direction: Direction::toward(origin, destination),
            floors_traveled: 0,
            sick: false,
            sick_floor_applied: false,
            on_board: false,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> OccupantId {
        self.id
    }

    pub fn kind(&self) -> OccupantKind {
        self.kind
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn footprint(&self) -> u32 {
        self.footprint
    }

    pub fn origin(&self) -> Floor {
        self.origin
    }

    pub fn current_floor(&self) -> Floor {
        self.current
    }

    pub fn destination(&self) -> Floor {
        self.destination
    }

    pub fn destination_direction(&self) -> Direction {
        self.destination_direction
    }

    pub fn floors_traveled(&self) -> u32 {
        self.floors_traveled
    }

    pub fn is_sick(&self) -> bool {
        self.sick
    }

    pub fn is_on_board(&self) -> bool {
        self.on_board
    }

    pub fn at_destination(&self) -> bool {
        self.current == self.destination
    }

    // ── Mutators driven by the car ────────────────────────────────────────

    pub fn set_on_board(&mut self, value: bool) {
        self.on_board = value;
    }

    /// The car carried this occupant one floor up.
    pub fn traveled_up(&mut self) {
        self.current = self.current.above();
        self.floors_traveled += 1;
    }

    /// The car carried this occupant one floor down.
    pub fn traveled_down(&mut self) {
        self.current = self.current.below();
        self.floors_traveled += 1;
    }

    // ── Per-frame behavior ────────────────────────────────────────────────

    /// One frame of occupant behavior.  Only active while on board.
    ///
    /// Computes the kind's sickness chance; once sick, stays sick, and the
    /// destination truncation to `current ± 1` happens exactly once — calling
    /// this again after sickness never moves the destination a second time.
    pub fn ride_frame(&mut self, rng: &mut SimRng) {
        if !self.on_board {
            return;
        }

        if !self.sick {
            self.sick = rng.chance(self.kind.sick_chance(self.floors_traveled));
        }

        if self.sick && !self.sick_floor_applied {
            self.sick_floor_applied = true;
            self.destination = match self.destination_direction {
                Direction::Up | Direction::Idle => self.current.above(),
                Direction::Down => self.current.below(),
            };
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn draw_destination(origin: Floor, range: FloorRange, rng: &mut SimRng) -> Floor {
    for _ in 0..3 {
        let candidate = Floor(rng.gen_range(range.lowest.0..range.highest.0));
        if candidate != origin {
            return candidate;
        }
    }

    // Three collisions in a row: force the adjacent floor.
    if origin == range.lowest {
        origin.above()
    } else {
        origin.below()
    }
}
