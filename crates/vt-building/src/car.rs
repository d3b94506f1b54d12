//! The `Car` — one elevator unit and its per-frame decision logic.
//!
//! # State machine
//!
//! Position `{AtFloor, Moving}` crossed with mode `{Normal, Maintenance,
//! Fire}`.  The maintenance and fire branches are inert pass-throughs that
//! revert to `Normal` after a single frame; richer fault behavior is left
//! for a later pass and the single-cycle revert is the contract until then.
//!
//! # Door and travel timing
//!
//! All timing is frame counts.  At a floor, the doors hold open for
//! `door_hold_frames` frames while one on-board occupant per frame is
//! evaluated for disembarking; between floors, one hop takes `travel_frames`
//! frames.  A car that claims a request elsewhere while empty slams its door
//! counter to the limit — doors don't linger on a floor nobody needs.

use vt_core::{CarId, Direction, Floor, FloorRange, Frame, SimRng};
use vt_occupant::Occupant;

use crate::config::CarConfig;
use crate::error::{BuildingError, BuildingResult};
use crate::ledger::RequestLedger;
use crate::sink::NotificationSink;

// ── State enums ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    AtFloor,
    Moving,
}

/// Operating mode.  Only `Normal` carries real logic; see the module docs.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Normal,
    Maintenance,
    Fire,
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// One elevator car.
#[derive(Debug)]
pub struct Car {
    id: CarId,
    label: String,
    capacity: u32,
    range: FloorRange,

    current: Floor,
    target: Floor,
    direction: Direction,
    phase: Phase,
    mode: Mode,

    /// Whether the current target came from the shared ledger (a floor
    /// request) rather than an on-board occupant's destination.  Decides
    /// whether reaching the target releases a claim.
    target_from_ledger: bool,

    door_counter: u32,
    travel_counter: u32,
    door_hold_frames: u32,
    travel_frames: u32,

    used: u32,
    occupants: Vec<Occupant>,
    /// Which on-board occupant gets evaluated next during this door-open
    /// window (one per frame — a packed car empties slowly).
    eval_cursor: usize,
}

impl Car {
    /// Validate a configuration and construct the car at its starting floor.
    pub fn new(config: &CarConfig) -> BuildingResult<Car> {
        let range = FloorRange::new(config.lowest_floor, config.highest_floor)?;
        if config.capacity == 0 {
            return Err(BuildingError::ZeroCarCapacity { car: config.id });
        }
        if config.door_hold_frames == 0 {
            return Err(BuildingError::ZeroFrameDuration { car: config.id, what: "door hold" });
        }
        if config.travel_frames == 0 {
            return Err(BuildingError::ZeroFrameDuration { car: config.id, what: "travel" });
        }
        if !range.contains(config.starting_floor) {
            return Err(BuildingError::StartingFloorOutOfRange {
                car:   config.id,
                floor: config.starting_floor,
                range,
            });
        }

        Ok(Car {
            id: config.id,
            label: format!("car {}", config.id.0),
            capacity: config.capacity,
            range,
            current: config.starting_floor,
            target: config.starting_floor,
            direction: Direction::Idle,
            phase: Phase::AtFloor,
            mode: Mode::Normal,
            target_from_ledger: true,
            door_counter: 0,
            travel_counter: 0,
            door_hold_frames: config.door_hold_frames,
            travel_frames: config.travel_frames,
            used: 0,
            occupants: Vec::new(),
            eval_cursor: 0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current
    }

    pub fn target_floor(&self) -> Floor {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Is the car stopped at a floor (as opposed to between floors)?
    pub fn at_floor(&self) -> bool {
        self.phase == Phase::AtFloor
    }

    pub fn at_target_floor(&self) -> bool {
        self.current == self.target
    }

    pub fn has_occupants(&self) -> bool {
        !self.occupants.is_empty()
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity - self.used
    }

    pub fn occupied_footprint(&self) -> u32 {
        self.used
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn reachable(&self) -> FloorRange {
        self.range
    }

    pub fn can_reach(&self, floor: Floor) -> bool {
        self.range.contains(floor)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn requires_maintenance(&self) -> bool {
        self.mode == Mode::Maintenance
    }

    // ── Requests and mode changes ─────────────────────────────────────────

    /// Forward a floor request to the shared ledger.  A floor already
    /// pending or claimed is not queued twice.
    pub fn submit_request<S: NotificationSink>(
        &self,
        floor:  Floor,
        ledger: &mut RequestLedger,
        frame:  Frame,
        sink:   &mut S,
    ) {
        if ledger.submit(floor) {
            sink.post(frame, &self.label, format_args!("accepted request at {floor}"));
        } else {
            sink.post(frame, &self.label, format_args!("{floor} already requested"));
        }
    }

    /// The building declared this car faulted.
    pub fn receive_fault<S: NotificationSink>(&mut self, frame: Frame, sink: &mut S) {
        self.mode = Mode::Maintenance;
        sink.post(frame, &self.label, format_args!("entering maintenance mode"));
    }

    /// Maintenance finished; only meaningful while in maintenance mode.
    pub fn mark_repaired<S: NotificationSink>(&mut self, frame: Frame, sink: &mut S) {
        if self.mode == Mode::Maintenance {
            self.mode = Mode::Normal;
            sink.post(frame, &self.label, format_args!("repaired, back to normal"));
        }
    }

    /// Dispatch this car for a fire: pick up at `origin`, ride to
    /// `fire_floor`.
    pub fn receive_fire_dispatch<S: NotificationSink>(
        &mut self,
        origin:     Floor,
        fire_floor: Floor,
        frame:      Frame,
        sink:       &mut S,
    ) {
        self.mode = Mode::Fire;
        sink.post(
            frame,
            &self.label,
            format_args!("fire dispatch: pickup at {origin}, fire at {fire_floor}"),
        );
    }

    // ── Boarding ──────────────────────────────────────────────────────────

    /// Would `occupant` fit and is its destination reachable?
    pub fn can_accept(&self, occupant: &Occupant) -> bool {
        occupant.footprint() <= self.remaining_capacity()
            && self.range.contains(occupant.destination())
    }

    /// Board an occupant.  On rejection the occupant is handed back so the
    /// caller can return it to its floor queue.
    ///
    /// On success: marked on-board, appended in boarding order, its origin
    /// floor dropped from the ledger's pending set, footprint consumed.
    pub fn accept_occupant<S: NotificationSink>(
        &mut self,
        mut occupant: Occupant,
        ledger:       &mut RequestLedger,
        frame:        Frame,
        sink:         &mut S,
    ) -> Result<(), Occupant> {
        if occupant.footprint() > self.remaining_capacity() {
            sink.post(
                frame,
                &self.label,
                format_args!("occupant {} does not fit, denied", occupant.id().0),
            );
            return Err(occupant);
        }
        if !self.range.contains(occupant.destination()) {
            sink.post(
                frame,
                &self.label,
                format_args!(
                    "occupant {} wants {}, out of this car's reach, denied",
                    occupant.id().0,
                    occupant.destination()
                ),
            );
            return Err(occupant);
        }

        occupant.set_on_board(true);
        if ledger.remove_pending(occupant.origin()) {
            sink.post(
                frame,
                &self.label,
                format_args!("request at {} cleared by boarding", occupant.origin()),
            );
        }
        self.used += occupant.footprint();
        sink.post(
            frame,
            &self.label,
            format_args!("occupant {} entered", occupant.id().0),
        );
        self.occupants.push(occupant);
        debug_assert!(self.used <= self.capacity, "capacity invariant broken");
        Ok(())
    }

    // ── Per-frame advance ─────────────────────────────────────────────────

    /// One frame of car behavior.
    ///
    /// A non-normal mode runs its (inert) handler and reverts to normal: a
    /// single frame of fault with no further effect.
    pub fn advance<S: NotificationSink>(
        &mut self,
        frame:  Frame,
        ledger: &mut RequestLedger,
        rng:    &mut SimRng,
        sink:   &mut S,
    ) {
        match self.mode {
            Mode::Normal => self.normal_frame(frame, ledger, rng, sink),
            Mode::Maintenance => {
                sink.post(frame, &self.label, format_args!("maintenance cycle"));
                self.mode = Mode::Normal;
            }
            Mode::Fire => {
                sink.post(frame, &self.label, format_args!("fire cycle"));
                self.mode = Mode::Normal;
            }
        }
    }

    fn normal_frame<S: NotificationSink>(
        &mut self,
        frame:  Frame,
        ledger: &mut RequestLedger,
        rng:    &mut SimRng,
        sink:   &mut S,
    ) {
        // Every rider gets a frame of its own behavior first; a freshly sick
        // rider truncates its destination before the door logic looks at it.
        for occupant in &mut self.occupants {
            occupant.ride_frame(rng);
        }

        match self.phase {
            Phase::AtFloor => self.at_floor_frame(frame, ledger, sink),
            Phase::Moving => self.moving_frame(frame, ledger, sink),
        }
    }

    /// Door-open logic: unload/evaluate one rider, scan for work when empty,
    /// and run the door-hold counter.
    fn at_floor_frame<S: NotificationSink>(
        &mut self,
        frame:  Frame,
        ledger: &mut RequestLedger,
        sink:   &mut S,
    ) {
        // One occupant per frame.  A packed car may not unload everyone who
        // wants off before the doors close.
        if self.eval_cursor < self.occupants.len() {
            let idx = self.eval_cursor;
            self.eval_cursor += 1;

            let leaving = {
                let o = &self.occupants[idx];
                o.at_destination() || o.is_sick()
            };
            if leaving {
                let occupant = self.occupants.remove(idx);
                self.used -= occupant.footprint();
                self.eval_cursor -= 1;
                sink.post(
                    frame,
                    &self.label,
                    format_args!("occupant {} got off at {}", occupant.id().0, self.current),
                );
                // A sick rider's early exit leaves the target at their
                // original destination; an empty car still rides it out.
            } else if self.at_target_floor() {
                // This stop was the car's target but not this rider's floor:
                // the rider now steers.
                let destination = self.occupants[idx].destination();
                self.target = destination;
                self.target_from_ledger = false;
                self.direction = Direction::toward(self.current, destination);
                sink.post(
                    frame,
                    &self.label,
                    format_args!(
                        "occupant {} set new target {destination}",
                        self.occupants[idx].id().0
                    ),
                );
            } else {
                sink.post(
                    frame,
                    &self.label,
                    format_args!("occupant {} is waiting", self.occupants[idx].id().0),
                );
            }
        }

        // An empty, idle car scans the shared ledger for its next job.
        if self.occupants.is_empty() && self.direction.is_idle() {
            match ledger.claim_next(self.range) {
                Some(floor) => {
                    self.target = floor;
                    self.target_from_ledger = true;
                    self.direction = Direction::toward(self.current, floor);
                    if self.target != self.current {
                        // No one aboard and the work is elsewhere: slam the
                        // doors now instead of waiting out the hold.
                        self.door_counter = self.door_hold_frames;
                        sink.post(
                            frame,
                            &self.label,
                            format_args!("claimed {floor}, no one aboard, leaving"),
                        );
                    } else {
                        sink.post(frame, &self.label, format_args!("claimed {floor}"));
                    }
                    sink.post(
                        frame,
                        &self.label,
                        format_args!("heading {}", self.direction),
                    );
                }
                None => {
                    // Nothing to do; the hold window starts over.
                    self.door_counter = 0;
                    sink.post(frame, &self.label, format_args!("no requests, idling"));
                }
            }
        }

        if self.door_counter == self.door_hold_frames {
            self.door_counter = 0;
            self.phase = Phase::Moving;
            self.eval_cursor = 0;
            sink.post(frame, &self.label, format_args!("closing doors"));

            // Still at the target when the doors shut: truly done here,
            // start scanning for new work next frame.
            if self.at_target_floor() {
                self.direction = Direction::Idle;
                sink.post(frame, &self.label, format_args!("no new requests, idling"));
            }
        } else if !self.direction.is_idle() {
            if self.at_target_floor() {
                self.direction = Direction::Idle;
                // A target that came from the ledger is now served.
                if self.target_from_ledger {
                    ledger.release(self.target);
                    sink.post(
                        frame,
                        &self.label,
                        format_args!("request at {} fulfilled", self.target),
                    );
                }
            } else {
                self.door_counter += 1;
                sink.post(frame, &self.label, format_args!("doors remaining open"));
            }
        }
    }

    /// In-transit logic: count out the hop, step one floor, and decide
    /// whether to stop or pass through.
    fn moving_frame<S: NotificationSink>(
        &mut self,
        frame:  Frame,
        ledger: &mut RequestLedger,
        sink:   &mut S,
    ) {
        // Not moving toward anything: settle back at the floor.
        if self.direction.is_idle() {
            self.phase = Phase::AtFloor;
            return;
        }

        // The shaft ends here; cannot overshoot.
        if self.direction == Direction::Down && self.current == self.range.lowest {
            self.travel_counter = self.travel_frames;
            self.direction = Direction::Idle;
            sink.post(frame, &self.label, format_args!("at ground, cannot go lower"));
        }
        if self.direction == Direction::Up && self.current == self.range.highest {
            self.travel_counter = self.travel_frames;
            self.direction = Direction::Idle;
            sink.post(frame, &self.label, format_args!("at roof, cannot go higher"));
        }

        if self.travel_counter == self.travel_frames {
            self.travel_counter = 0;
            self.phase = Phase::AtFloor;

            match self.direction {
                Direction::Down => {
                    self.current = self.current.below();
                    for occupant in &mut self.occupants {
                        occupant.traveled_down();
                    }
                    sink.post(frame, &self.label, format_args!("reached {}", self.current));
                }
                Direction::Up => {
                    self.current = self.current.above();
                    for occupant in &mut self.occupants {
                        occupant.traveled_up();
                    }
                    sink.post(frame, &self.label, format_args!("reached {}", self.current));
                }
                Direction::Idle => {}
            }

            // Stop only when something here wants us: an outstanding request,
            // the car's own target, or a rider whose floor this is.
            let rider_stop = self.occupants.iter().any(Occupant::at_destination);
            if !ledger.has_request_at(self.current)
                && self.current != self.target
                && !rider_stop
            {
                self.phase = Phase::Moving;
                sink.post(frame, &self.label, format_args!("passing through"));
            } else {
                sink.post(frame, &self.label, format_args!("opening doors"));
            }
        } else {
            self.travel_counter += 1;
            sink.post(frame, &self.label, format_args!("moving {}", self.direction));
        }
    }
}
