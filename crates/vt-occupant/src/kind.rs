//! Occupant kind variants and their sickness probability functions.
//!
//! The rider types differ in exactly one capability, their sickness
//! probability, so they are a tagged enum carrying each kind's probability
//! payload with a single `match` in [`OccupantKind::sick_chance`] rather than
//! a trait object per kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of rider this occupant is, with the kind-specific parameters of
/// its per-frame sickness check.
#[derive(Copy, Clone, PartialEq, Debug)]
#[derive(Serialize, Deserialize)]
pub enum OccupantKind {
    /// A regular rider.  Chance grows with distance traveled:
    /// `floors_traveled * factor1 * factor0`.
    Civilian { factor0: f64, factor1: f64 },

    /// Responds to a car fault.  Constant small per-frame chance,
    /// independent of travel.
    MaintenanceCrew { rate: f64 },

    /// Responds to a fire.  Constant, very small per-frame chance.
    Firefighter { rate: f64 },
}

impl OccupantKind {
    pub const DEFAULT_CIVILIAN_FACTOR0: f64 = 0.01;
    pub const DEFAULT_CIVILIAN_FACTOR1: f64 = 1.1;
    pub const DEFAULT_MAINTENANCE_RATE: f64 = 0.01;
    pub const DEFAULT_FIREFIGHTER_RATE: f64 = 0.001;

    pub fn civilian() -> OccupantKind {
        OccupantKind::Civilian {
            factor0: Self::DEFAULT_CIVILIAN_FACTOR0,
            factor1: Self::DEFAULT_CIVILIAN_FACTOR1,
        }
    }

    pub fn maintenance_crew() -> OccupantKind {
        OccupantKind::MaintenanceCrew { rate: Self::DEFAULT_MAINTENANCE_RATE }
    }

    pub fn firefighter() -> OccupantKind {
        OccupantKind::Firefighter { rate: Self::DEFAULT_FIREFIGHTER_RATE }
    }

    /// Probability that this occupant becomes sick this frame, given how many
    /// floors it has ridden so far.
    #[inline]
    pub fn sick_chance(&self, floors_traveled: u32) -> f64 {
        match *self {
            OccupantKind::Civilian { factor0, factor1 } => {
                floors_traveled as f64 * factor1 * factor0
            }
            OccupantKind::MaintenanceCrew { rate } => rate,
            OccupantKind::Firefighter { rate } => rate,
        }
    }

    /// The title this kind is registered under in a
    /// [`PriorityTable`][crate::PriorityTable].
    pub fn title(&self) -> &'static str {
        match self {
            OccupantKind::Civilian { .. }        => "civilian",
            OccupantKind::MaintenanceCrew { .. } => "maintenance",
            OccupantKind::Firefighter { .. }     => "firefighter",
        }
    }
}

impl fmt::Display for OccupantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
