use thiserror::Error;

use vt_core::{Floor, FloorRange};

#[derive(Debug, Error)]
pub enum OccupantError {
    #[error("occupant footprint must be positive")]
    ZeroFootprint,

    #[error("origin {origin} outside building range {range}")]
    OriginOutOfRange { origin: Floor, range: FloorRange },

    #[error("destination {destination} outside building range {range}")]
    DestinationOutOfRange { destination: Floor, range: FloorRange },

    #[error("no priority assigned for title {0:?}")]
    UnknownTitle(String),
}

pub type OccupantResult<T> = Result<T, OccupantError>;
