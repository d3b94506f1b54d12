//! Construction-time validation errors.
//!
//! Everything here is raised while building a [`Building`][crate::Building]
//! or a [`Car`][crate::Car]; once construction succeeds, the per-frame path
//! never returns an error — denied boardings, full queues, and capacity
//! overflows are ordinary control-flow outcomes.

use thiserror::Error;

use vt_core::{CarId, Floor, FloorRange, VtError};
use vt_occupant::OccupantError;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error(transparent)]
    Core(#[from] VtError),

    #[error(transparent)]
    Occupant(#[from] OccupantError),

    #[error("building has no cars configured")]
    NoCars,

    #[error("maximum occupants per floor must be positive")]
    ZeroFloorCapacity,

    #[error("spawn profile: minimum footprint must be positive")]
    ZeroMinFootprint,

    #[error("{car}: capacity must be positive")]
    ZeroCarCapacity { car: CarId },

    #[error("{car}: {what} duration must be at least one frame")]
    ZeroFrameDuration { car: CarId, what: &'static str },

    #[error("{car}: starting {floor} outside reachable range {range}")]
    StartingFloorOutOfRange {
        car:   CarId,
        floor: Floor,
        range: FloorRange,
    },
}

pub type BuildingResult<T> = Result<T, BuildingError>;
