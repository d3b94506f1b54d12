//! Building and car configuration.
//!
//! Plain data with `serde` derives; the application shell typically loads
//! these from a JSON/TOML file and hands them to
//! [`BuildingBuilder`][crate::BuildingBuilder], which owns all validation.

use serde::{Deserialize, Serialize};

use vt_core::{CarId, Floor};
use vt_occupant::SpawnProfile;

// ── CarConfig ─────────────────────────────────────────────────────────────────

/// Everything needed to construct one [`Car`][crate::Car].
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub struct CarConfig {
    pub id: CarId,
    /// Total footprint the car can hold.
    pub capacity: u32,
    /// Lowest floor this car can reach (cars may serve a sub-span of the
    /// building).
    pub lowest_floor: Floor,
    pub highest_floor: Floor,
    pub starting_floor: Floor,
    /// How many frames the doors hold open at a stop.
    pub door_hold_frames: u32,
    /// How many frames one floor-to-floor hop takes.
    pub travel_frames: u32,
}

impl CarConfig {
    /// The stock car: capacity 15, 4-frame door hold and travel, parked at
    /// the bottom of its span.
    pub fn standard(id: CarId, lowest_floor: Floor, highest_floor: Floor) -> CarConfig {
        CarConfig {
            id,
            capacity: 15,
            lowest_floor,
            highest_floor,
            starting_floor: lowest_floor,
            door_hold_frames: 4,
            travel_frames: 4,
        }
    }
}

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub struct BuildingConfig {
    pub lowest_floor: Floor,
    pub highest_floor: Floor,
    /// Hard cap on how many occupants can wait on one floor.
    pub max_occupants_per_floor: usize,
    pub cars: Vec<CarConfig>,
    /// Parameters for dispatcher-fabricated occupants.
    #[serde(default)]
    pub spawn: SpawnProfile,
}

impl Default for BuildingConfig {
    /// Ten floors, three waiting spots per floor, two stock cars.
    fn default() -> Self {
        let lowest = Floor(0);
        let highest = Floor(10);
        BuildingConfig {
            lowest_floor: lowest,
            highest_floor: highest,
            max_occupants_per_floor: 3,
            cars: vec![
                CarConfig::standard(CarId(0), lowest, highest),
                CarConfig::standard(CarId(1), lowest, highest),
            ],
            spawn: SpawnProfile::default(),
        }
    }
}
