//! Travel direction of a car or occupant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Floor;

/// Which way a car is (or an occupant wants to be) moving.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Direction of travel from `from` to `to`.
    ///
    /// `to == from` resolves to `Up` — the same tie-break the dispatch logic
    /// relies on when a degenerate building leaves destination == origin.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to < from { Direction::Down } else { Direction::Up }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == Direction::Idle
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "UP",
            Direction::Down => "DOWN",
            Direction::Idle => "IDLE",
        };
        f.write_str(s)
    }
}
