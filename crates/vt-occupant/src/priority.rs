//! Title → priority lookup.
//!
//! The table is an immutable value constructed at simulation startup and
//! passed down through configuration, never process-wide state, so
//! independent simulations (and tests) can carry different orderings without
//! touching anything shared.

use std::collections::HashMap;

use crate::{OccupantError, OccupantResult};

/// Immutable mapping from occupant title to numeric priority.
///
/// Lower numbers are more urgent; 0 is the highest priority.  The numeric
/// values are assignment order, not magnitudes — only the relative ordering
/// matters anywhere priorities are compared.
#[derive(Clone, Debug)]
pub struct PriorityTable {
    map:    HashMap<String, u8>,
    lowest: u8,
}

impl PriorityTable {
    pub const HIGHEST_PRIORITY: u8 = 0;

    /// Build a table from a ranking, most urgent title first.
    pub fn with_ranking(titles: &[&str]) -> PriorityTable {
        let mut map = HashMap::with_capacity(titles.len());
        let mut next = Self::HIGHEST_PRIORITY;
        for title in titles {
            map.insert((*title).to_owned(), next);
            next = next.saturating_add(1);
        }
        PriorityTable {
            map,
            lowest: next.saturating_sub(1),
        }
    }

    /// Look up the priority assigned to `title`.
    ///
    /// Blank or unregistered titles are an error — an occupant must never be
    /// constructed without a priority.
    pub fn priority_of(&self, title: &str) -> OccupantResult<u8> {
        if title.trim().is_empty() {
            return Err(OccupantError::UnknownTitle(title.to_owned()));
        }
        self.map
            .get(title)
            .copied()
            .ok_or_else(|| OccupantError::UnknownTitle(title.to_owned()))
    }

    pub fn highest(&self) -> u8 {
        Self::HIGHEST_PRIORITY
    }

    pub fn lowest(&self) -> u8 {
        self.lowest
    }
}

impl Default for PriorityTable {
    /// The standard ranking: firefighter, then maintenance, then civilian.
    fn default() -> Self {
        PriorityTable::with_ranking(&["firefighter", "maintenance", "civilian"])
    }
}
