//! The `Building` — frame-loop dispatcher over cars, queues, and the ledger.
//!
//! `operate` is the whole public surface: one call is one frame, running the
//! four stages described in the [crate docs](crate).  Everything inside is
//! deterministic given the seed and the event policy.

use vt_core::{Floor, FloorRange, Frame, OccupantId, SimRng};
use vt_event::{EventKind, EventPolicy};
use vt_occupant::{Occupant, SpawnProfile};

use crate::car::Car;
use crate::ledger::RequestLedger;
use crate::queues::FloorQueues;
use crate::sink::NotificationSink;

const BUILDING: &str = "building";

/// The simulated building.  Construct through
/// [`BuildingBuilder`][crate::BuildingBuilder].
#[derive(Debug)]
pub struct Building {
    pub(crate) range: FloorRange,
    pub(crate) cars: Vec<Car>,
    pub(crate) queues: FloorQueues,
    pub(crate) ledger: RequestLedger,
    pub(crate) policy: EventPolicy,
    pub(crate) spawn: SpawnProfile,

    // Priorities are resolved against the table at build time so a frame
    // never fails on a lookup.
    pub(crate) civilian_priority: u8,
    pub(crate) maintenance_priority: u8,
    pub(crate) firefighter_priority: u8,

    pub(crate) rng: SimRng,
    pub(crate) frame: Frame,
    pub(crate) next_occupant: u32,
    /// Guards against a fire handler re-entering while it is populating the
    /// building's response.  Set and cleared within one handler run.
    pub(crate) fire_active: bool,
}

impl Building {
    // ── Observation ───────────────────────────────────────────────────────

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn floor_range(&self) -> FloorRange {
        self.range
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn ledger(&self) -> &RequestLedger {
        &self.ledger
    }

    pub fn queues(&self) -> &FloorQueues {
        &self.queues
    }

    pub fn total_waiting(&self) -> usize {
        self.queues.total_waiting()
    }

    /// Swap the event policy between frames.  Typical use is a scripted
    /// warm-up that hands over to the weighted live odds.
    pub fn set_policy(&mut self, policy: EventPolicy) {
        self.policy = policy;
    }

    // ── The frame loop ────────────────────────────────────────────────────

    /// Run one frame: draw an event, apply it, advance every car, and board
    /// waiting occupants.
    pub fn operate<S: NotificationSink>(&mut self, sink: &mut S) {
        let event = self.policy.next(&mut self.rng);
        sink.post(self.frame, BUILDING, format_args!("----- {event} EVENT -----"));

        match event {
            EventKind::Idle => {}
            EventKind::Arrival => self.handle_arrival(sink),
            EventKind::CarFault => self.handle_car_fault(sink),
            EventKind::Fire => self.handle_fire(sink),
        }

        self.advance_cars(sink);
        self.frame = self.frame.next();
    }

    // ── Event handlers ────────────────────────────────────────────────────

    /// A civilian appears on a random floor wanting to go somewhere else.
    fn handle_arrival<S: NotificationSink>(&mut self, sink: &mut S) {
        let origin = Floor(self.rng.gen_range(self.range.lowest.0..self.range.highest.0));
        let footprint = self.spawn.draw_footprint(&mut self.rng);
        let id = self.next_occupant_id();

        let occupant = match Occupant::spawn(
            id,
            self.spawn.civilian_kind(),
            self.civilian_priority,
            footprint,
            origin,
            self.range,
            &mut self.rng,
        ) {
            Ok(o) => o,
            Err(err) => {
                sink.post(self.frame, BUILDING, format_args!("arrival rejected: {err}"));
                return;
            }
        };

        if self.queues.has_room(origin) {
            sink.post(
                self.frame,
                BUILDING,
                format_args!(
                    "occupant {} arrived at {origin}, heading to {}",
                    id.0,
                    occupant.destination()
                ),
            );
            // Bounded by has_room above.
            let _ = self.queues.enqueue(occupant);
            self.request_pickup(origin, sink);
        } else {
            sink.post(
                self.frame,
                BUILDING,
                format_args!("{origin} is full, occupant {} left", id.0),
            );
        }
    }

    /// A car breaks: it enters maintenance mode, a maintenance crew member
    /// is forced into the queue at the fault floor, and the repair is logged
    /// once the crew is dispatched.
    fn handle_car_fault<S: NotificationSink>(&mut self, sink: &mut S) {
        // Prefer a car not already under maintenance; with none available the
        // fault piles onto whichever comes first in the shuffle.
        let mut order: Vec<usize> = (0..self.cars.len()).collect();
        self.rng.shuffle(&mut order);
        let chosen = order
            .iter()
            .copied()
            .find(|&i| !self.cars[i].requires_maintenance())
            .unwrap_or(order[0]);

        let fault_floor = self.cars[chosen].current_floor();
        self.cars[chosen].receive_fault(self.frame, sink);

        let id = self.next_occupant_id();
        let crew = match Occupant::spawn(
            id,
            self.spawn.maintenance_kind(),
            self.maintenance_priority,
            self.spawn.min_footprint.max(1),
            fault_floor,
            self.range,
            &mut self.rng,
        ) {
            Ok(o) => o,
            Err(err) => {
                sink.post(self.frame, BUILDING, format_args!("fault response failed: {err}"));
                return;
            }
        };

        sink.post(
            self.frame,
            BUILDING,
            format_args!("maintenance crew {} dispatched to {fault_floor}", id.0),
        );
        if let Some(evicted) = self.queues.force_enqueue(crew) {
            sink.post(
                self.frame,
                BUILDING,
                format_args!(
                    "occupant {} displaced from {fault_floor} by maintenance crew",
                    evicted.id().0
                ),
            );
        }
        self.request_pickup(fault_floor, sink);
        self.cars[chosen].mark_repaired(self.frame, sink);
    }

    /// Fire on a random floor: queues evacuate by stairs, a firefighter is
    /// staged at the bottom floor with the fire floor as destination, and a
    /// capable car is dispatched.
    fn handle_fire<S: NotificationSink>(&mut self, sink: &mut S) {
        if self.fire_active {
            return;
        }
        self.fire_active = true;

        let fire_floor = Floor(self.rng.gen_range(self.range.lowest.0..=self.range.highest.0));
        sink.post(self.frame, BUILDING, format_args!("fire on {fire_floor}"));

        let cleared = self.queues.clear_all();
        sink.post(
            self.frame,
            BUILDING,
            format_args!("{cleared} occupants evacuated by stairs"),
        );

        let id = self.next_occupant_id();
        match Occupant::with_destination(
            id,
            self.spawn.firefighter_kind(),
            self.firefighter_priority,
            self.spawn.min_footprint.max(1),
            self.range.lowest,
            fire_floor,
            self.range,
        ) {
            Ok(firefighter) => {
                sink.post(
                    self.frame,
                    BUILDING,
                    format_args!("firefighter {} staged at {}", id.0, self.range.lowest),
                );
                if let Some(evicted) = self.queues.force_enqueue(firefighter) {
                    sink.post(
                        self.frame,
                        BUILDING,
                        format_args!("occupant {} displaced by firefighter", evicted.id().0),
                    );
                }
                self.request_pickup(self.range.lowest, sink);
            }
            Err(err) => {
                sink.post(self.frame, BUILDING, format_args!("fire response failed: {err}"));
            }
        }

        match self.cars.iter().position(|c| c.can_reach(fire_floor)) {
            Some(idx) => {
                self.cars[idx].receive_fire_dispatch(self.range.lowest, fire_floor, self.frame, sink);
            }
            None => {
                sink.post(
                    self.frame,
                    BUILDING,
                    format_args!("no car can reach {fire_floor}"),
                );
            }
        }

        self.fire_active = false;
    }

    // ── Car advance and boarding reconciliation ───────────────────────────

    fn advance_cars<S: NotificationSink>(&mut self, sink: &mut S) {
        for i in 0..self.cars.len() {
            self.cars[i].advance(self.frame, &mut self.ledger, &mut self.rng, sink);

            if !self.cars[i].at_floor() {
                continue;
            }
            self.board_from_queue(i, sink);
        }
    }

    /// Walk the at-floor car's queue front to back, boarding everyone who is
    /// allowed.  An occupant whose direction conflicts (or who bounces off a
    /// full car) stays in line, and their floor is re-requested so another
    /// car will come.
    fn board_from_queue<S: NotificationSink>(&mut self, car_idx: usize, sink: &mut S) {
        let floor = self.cars[car_idx].current_floor();
        let mut idx = 0;

        while idx < self.queues.len_at(floor) {
            let (wants, origin) = {
                let waiting = &self.queues.queue(floor)[idx];
                (waiting.destination_direction(), waiting.origin())
            };

            let car = &self.cars[car_idx];
            let boardable = wants == car.direction()
                || car.direction().is_idle()
                || !car.has_occupants()
                || car.at_target_floor();

            if !boardable {
                self.cars[car_idx].submit_request(origin, &mut self.ledger, self.frame, sink);
                idx += 1;
                continue;
            }

            let Some(occupant) = self.queues.remove_at(floor, idx) else {
                break;
            };
            match self.cars[car_idx].accept_occupant(occupant, &mut self.ledger, self.frame, sink)
            {
                // The queue shifted left; the same index is the next rider.
                Ok(()) => {}
                Err(bounced) => {
                    self.cars[car_idx].submit_request(
                        bounced.origin(),
                        &mut self.ledger,
                        self.frame,
                        sink,
                    );
                    self.queues.insert_at(floor, idx, bounced);
                    idx += 1;
                }
            }
        }
    }

    // ── Scripted entry points ─────────────────────────────────────────────

    /// Place a pre-built occupant in its origin floor's queue and request a
    /// pickup there.  Scripted scenarios use this instead of the random
    /// arrival event; the occupant comes back when the floor is full.
    pub fn admit_occupant<S: NotificationSink>(
        &mut self,
        occupant: Occupant,
        sink:     &mut S,
    ) -> Result<(), Occupant> {
        let origin = occupant.origin();
        self.queues.enqueue(occupant)?;
        self.request_pickup(origin, sink);
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn request_pickup<S: NotificationSink>(&mut self, floor: Floor, sink: &mut S) {
        // Any car can forward a request; the ledger is shared.
        if let Some(car) = self.cars.first() {
            car.submit_request(floor, &mut self.ledger, self.frame, sink);
        }
    }

    fn next_occupant_id(&mut self) -> OccupantId {
        let id = OccupantId(self.next_occupant);
        self.next_occupant += 1;
        id
    }
}
