//! `vt-event` — the event-generation policy that drives the simulation clock.
//!
//! Each frame the dispatcher asks the policy for one event.  A policy is
//! either a fixed script (deterministic replay, the backbone of every
//! scenario test) or a weighted probability table (the "live" mode).
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`event`]  | `EventKind`                                |
//! | [`policy`] | `EventPolicy` (scripted / weighted)        |
//! | [`loader`] | `load_script_csv`, `load_script_reader`    |
//! | [`error`]  | `EventError`, `EventResult<T>`             |

pub mod error;
pub mod event;
pub mod loader;
pub mod policy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EventError, EventResult};
pub use event::EventKind;
pub use loader::{load_script_csv, load_script_reader};
pub use policy::EventPolicy;
