//! `vt-occupant` — riders and request-originators for the `rust_vt` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`occupant`]  | `Occupant` state + per-frame ride hook               |
//! | [`kind`]      | `OccupantKind` tagged sickness variants              |
//! | [`priority`]  | `PriorityTable` (immutable title → priority map)     |
//! | [`profile`]   | `SpawnProfile` (footprint bounds, sickness factors)  |
//! | [`error`]     | `OccupantError`, `OccupantResult<T>`                 |
//!
//! # Sickness model (summary)
//!
//! Every occupant kind shares one hook: while on board, each frame computes
//! whether the occupant becomes sick (idempotent once true), and a freshly
//! sick occupant truncates its destination to the next floor in its original
//! direction of travel — exactly once.  Kinds differ only in the probability
//! function, selected by a single `match` in [`OccupantKind::sick_chance`].

pub mod error;
pub mod kind;
pub mod occupant;
pub mod priority;
pub mod profile;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{OccupantError, OccupantResult};
pub use kind::OccupantKind;
pub use occupant::Occupant;
pub use priority::PriorityTable;
pub use profile::SpawnProfile;
