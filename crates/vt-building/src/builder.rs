//! Validated construction of a [`Building`].
//!
//! All configuration errors surface here, before the first frame runs.  The
//! builder also resolves the occupant priority titles against the table once,
//! so the frame loop never does a fallible lookup.

use vt_core::{FloorRange, Frame, SimRng};
use vt_event::EventPolicy;
use vt_occupant::PriorityTable;

use crate::building::Building;
use crate::car::Car;
use crate::config::BuildingConfig;
use crate::error::{BuildingError, BuildingResult};
use crate::ledger::RequestLedger;
use crate::queues::FloorQueues;

/// Fluent builder for a [`Building`].
///
/// ```rust,ignore
/// let building = BuildingBuilder::new(BuildingConfig::default())
///     .policy(EventPolicy::default_weighted())
///     .seed(7)
///     .build()?;
/// ```
pub struct BuildingBuilder {
    config: BuildingConfig,
    policy: EventPolicy,
    priorities: PriorityTable,
    seed: u64,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> BuildingBuilder {
        BuildingBuilder {
            config,
            policy: EventPolicy::default_weighted(),
            priorities: PriorityTable::default(),
            seed: 0,
        }
    }

    /// Replace the default weighted event policy.
    pub fn policy(mut self, policy: EventPolicy) -> BuildingBuilder {
        self.policy = policy;
        self
    }

    /// Replace the default priority ranking.
    pub fn priorities(mut self, table: PriorityTable) -> BuildingBuilder {
        self.priorities = table;
        self
    }

    pub fn seed(mut self, seed: u64) -> BuildingBuilder {
        self.seed = seed;
        self
    }

    /// Validate the configuration and assemble the building.
    pub fn build(self) -> BuildingResult<Building> {
        let range = FloorRange::new(self.config.lowest_floor, self.config.highest_floor)?;

        if self.config.max_occupants_per_floor == 0 {
            return Err(BuildingError::ZeroFloorCapacity);
        }
        if self.config.cars.is_empty() {
            return Err(BuildingError::NoCars);
        }
        if self.config.spawn.min_footprint == 0 {
            return Err(BuildingError::ZeroMinFootprint);
        }

        let mut cars = Vec::with_capacity(self.config.cars.len());
        for car_config in &self.config.cars {
            cars.push(Car::new(car_config)?);
        }

        let civilian_priority = self.priorities.priority_of("civilian")?;
        let maintenance_priority = self.priorities.priority_of("maintenance")?;
        let firefighter_priority = self.priorities.priority_of("firefighter")?;

        Ok(Building {
            queues: FloorQueues::new(range, self.config.max_occupants_per_floor),
            range,
            cars,
            ledger: RequestLedger::new(),
            policy: self.policy,
            spawn: self.config.spawn,
            civilian_priority,
            maintenance_priority,
            firefighter_priority,
            rng: SimRng::new(self.seed),
            frame: Frame::ZERO,
            next_occupant: 0,
            fire_active: false,
        })
    }
}
