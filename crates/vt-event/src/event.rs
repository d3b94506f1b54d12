//! The four building-level event kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One simulation event, procured once per frame by the dispatcher.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Nothing happens this frame.
    #[default]
    Idle,
    /// A new civilian arrives on a random floor and presses the call button.
    Arrival,
    /// A car develops a fault and a maintenance crew is summoned.
    #[serde(rename = "fault")]
    CarFault,
    /// A floor catches fire; the building evacuates and a firefighter is
    /// dispatched.
    Fire,
}

impl EventKind {
    /// Parse the loader's textual form.  Case-insensitive.
    pub fn parse(s: &str) -> Option<EventKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle"    => Some(EventKind::Idle),
            "arrival" => Some(EventKind::Arrival),
            "fault"   => Some(EventKind::CarFault),
            "fire"    => Some(EventKind::Fire),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Idle     => "IDLE",
            EventKind::Arrival  => "ARRIVAL",
            EventKind::CarFault => "CAR_FAULT",
            EventKind::Fire     => "FIRE",
        };
        f.write_str(s)
    }
}
