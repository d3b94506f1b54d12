//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `VtError`
//! via `From` impls or keep them separate.  Everything here is raised at
//! construction time; the per-frame path never errors.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `vt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VtError {
    #[error("invalid floor range: lowest {lowest} must be below highest {highest}")]
    InvalidFloorRange { lowest: Floor, highest: Floor },

    #[error("{floor} outside reachable range")]
    FloorOutOfRange { floor: Floor },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `vt-*` crates.
pub type VtResult<T> = Result<T, VtError>;
