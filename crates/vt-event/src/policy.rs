//! Scripted and weighted event policies.

use vt_core::SimRng;

use crate::EventKind;

/// Produces the next simulation event each frame.
///
/// # Weighted mode
///
/// The table holds `(kind, probability)` buckets kept sorted ascending by
/// probability.  One uniform draw in `[0, 1)` is compared against each bucket
/// in order; the first bucket whose probability exceeds the draw wins.
/// Probabilities need not sum to 1 — a draw that beats no bucket yields
/// `Idle`.  Sorting ascending means the rarest events get first refusal on
/// small draws, which is what makes independent per-bucket probabilities
/// behave sensibly.
///
/// # Scripted mode
///
/// Replays a fixed sequence.  Past the end, the script either wraps
/// (`looping`) or repeats its final event forever — so a finite script always
/// keeps answering.
#[derive(Clone, Debug)]
pub enum EventPolicy {
    Scripted {
        events:  Vec<EventKind>,
        cursor:  usize,
        looping: bool,
    },
    Weighted {
        /// `(kind, probability)` sorted ascending by probability.
        table: Vec<(EventKind, f64)>,
    },
}

impl EventPolicy {
    /// A finite script.  An empty script degenerates to `Idle` forever.
    pub fn scripted(events: Vec<EventKind>) -> EventPolicy {
        EventPolicy::Scripted { events, cursor: 0, looping: false }
    }

    /// A script that wraps back to the start when exhausted.
    pub fn scripted_looping(events: Vec<EventKind>) -> EventPolicy {
        EventPolicy::Scripted { events, cursor: 0, looping: true }
    }

    /// A weighted table; entries are sorted ascending by probability here so
    /// callers can supply them in any order.
    pub fn weighted(mut table: Vec<(EventKind, f64)>) -> EventPolicy {
        table.sort_by(|a, b| a.1.total_cmp(&b.1));
        EventPolicy::Weighted { table }
    }

    /// The standard live-mode odds: mostly idle, arrivals fairly common,
    /// faults rare, fires very rare.
    pub fn default_weighted() -> EventPolicy {
        EventPolicy::weighted(vec![
            (EventKind::Idle,     0.8),
            (EventKind::Arrival,  0.19),
            (EventKind::CarFault, 0.0089),
            (EventKind::Fire,     0.0011),
        ])
    }

    /// Produce the next event.
    pub fn next(&mut self, rng: &mut SimRng) -> EventKind {
        match self {
            EventPolicy::Scripted { events, cursor, looping } => {
                if events.is_empty() {
                    return EventKind::Idle;
                }
                if *cursor >= events.len() {
                    if *looping {
                        *cursor = 0;
                    } else {
                        // Finite script exhausted: repeat the final event.
                        return events[events.len() - 1];
                    }
                }
                let event = events[*cursor];
                *cursor += 1;
                event
            }
            EventPolicy::Weighted { table } => {
                let roll = rng.roll();
                for &(kind, probability) in table.iter() {
                    if roll < probability {
                        return kind;
                    }
                }
                EventKind::Idle
            }
        }
    }
}

impl Default for EventPolicy {
    fn default() -> Self {
        EventPolicy::default_weighted()
    }
}
