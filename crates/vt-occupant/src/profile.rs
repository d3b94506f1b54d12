//! Spawn-time parameters for dispatcher-fabricated occupants.

use serde::{Deserialize, Serialize};

use vt_core::SimRng;

use crate::OccupantKind;

/// Tunable parameters used when the dispatcher fabricates occupants in
/// response to events.  Part of the building configuration.
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Smallest footprint a random occupant can have.
    pub min_footprint: u32,
    /// Exclusive upper bound on a random occupant's footprint.
    pub max_footprint: u32,
    /// `(factor0, factor1)` of the civilian sickness curve.
    pub civilian_factors: (f64, f64),
    pub maintenance_rate: f64,
    pub firefighter_rate: f64,
}

impl SpawnProfile {
    pub fn civilian_kind(&self) -> OccupantKind {
        OccupantKind::Civilian {
            factor0: self.civilian_factors.0,
            factor1: self.civilian_factors.1,
        }
    }

    pub fn maintenance_kind(&self) -> OccupantKind {
        OccupantKind::MaintenanceCrew { rate: self.maintenance_rate }
    }

    pub fn firefighter_kind(&self) -> OccupantKind {
        OccupantKind::Firefighter { rate: self.firefighter_rate }
    }

    /// Draw a footprint in `[min_footprint, max_footprint)`.
    pub fn draw_footprint(&self, rng: &mut SimRng) -> u32 {
        if self.min_footprint + 1 >= self.max_footprint {
            return self.min_footprint.max(1);
        }
        rng.gen_range(self.min_footprint..self.max_footprint)
    }
}

impl Default for SpawnProfile {
    fn default() -> Self {
        SpawnProfile {
            min_footprint:    2,
            max_footprint:    10,
            civilian_factors: (
                OccupantKind::DEFAULT_CIVILIAN_FACTOR0,
                OccupantKind::DEFAULT_CIVILIAN_FACTOR1,
            ),
            maintenance_rate: OccupantKind::DEFAULT_MAINTENANCE_RATE,
            firefighter_rate: OccupantKind::DEFAULT_FIREFIGHTER_RATE,
        }
    }
}
