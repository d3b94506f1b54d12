//! `vt-building` — the dispatch and motion core of the `rust_vt` framework.
//!
//! # Frame order
//!
//! ```text
//! for each frame:
//!   ① Event    — pull one event from the policy (scripted or weighted).
//!   ② Effects  — apply its side effects: spawn occupants, push ledger
//!                requests, force faults / fires.
//!   ③ Cars     — advance every car one frame, in configuration order.
//!                A car consumes the shared RequestLedger and moves or
//!                loads/unloads its riders.
//!   ④ Queues   — reconcile each at-floor car against its floor queue:
//!                board whoever is allowed, resubmit whoever is not.
//! ```
//!
//! Everything is single-threaded and turn-based; the same seed and the same
//! event script reproduce a run exactly.  The outer application shell owns
//! wall-clock pacing and calls [`Building::operate`] once per frame.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`car`]      | `Car` — per-elevator motion/door state machine      |
//! | [`ledger`]   | `RequestLedger` — cross-car request coordination    |
//! | [`queues`]   | `FloorQueues` — per-floor waiting lines             |
//! | [`building`] | `Building` — the frame-loop dispatcher              |
//! | [`builder`]  | `BuildingBuilder` — validated construction          |
//! | [`config`]   | `BuildingConfig`, `CarConfig`                       |
//! | [`sink`]     | `NotificationSink` and stock implementations        |
//! | [`error`]    | `BuildingError`, `BuildingResult<T>`                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_building::{BuildingBuilder, BuildingConfig, ConsoleSink};
//!
//! let mut building = BuildingBuilder::new(BuildingConfig::default())
//!     .seed(42)
//!     .build()?;
//! let mut sink = ConsoleSink;
//! loop {
//!     building.operate(&mut sink);
//! }
//! ```

pub mod builder;
pub mod building;
pub mod car;
pub mod config;
pub mod error;
pub mod ledger;
pub mod queues;
pub mod sink;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::BuildingBuilder;
pub use building::Building;
pub use car::Car;
pub use config::{BuildingConfig, CarConfig};
pub use error::{BuildingError, BuildingResult};
pub use ledger::RequestLedger;
pub use queues::FloorQueues;
pub use sink::{ConsoleSink, MemorySink, NoopSink, NotificationSink};
