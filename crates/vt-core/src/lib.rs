//! `vt-core` — foundational types for the `rust_vt` vertical-transport
//! simulation framework.
//!
//! This crate is a dependency of every other `vt-*` crate.  It intentionally
//! has no `vt-*` dependencies and minimal external ones (only `rand`, `serde`,
//! and `thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`ids`]       | `CarId`, `OccupantId`                           |
//! | [`floor`]     | `Floor`, `FloorRange`                           |
//! | [`direction`] | `Direction` enum                                |
//! | [`frame`]     | `Frame` counter                                 |
//! | [`rng`]       | `SimRng` (seeded, shared)                       |
//! | [`error`]     | `VtError`, `VtResult`                           |

pub mod direction;
pub mod error;
pub mod floor;
pub mod frame;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{VtError, VtResult};
pub use floor::{Floor, FloorRange};
pub use frame::Frame;
pub use ids::{CarId, OccupantId};
pub use rng::SimRng;
