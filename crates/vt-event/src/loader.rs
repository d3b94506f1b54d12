//! CSV event-script loader.
//!
//! # CSV format
//!
//! One row per frame, in replay order:
//!
//! ```csv
//! event
//! idle
//! arrival
//! idle
//! fault
//! fire
//! ```
//!
//! Accepted values (case-insensitive): `idle`, `arrival`, `fault`, `fire`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{EventError, EventKind};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    event: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered event script from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<Vec<EventKind>, EventError> {
    let file = std::fs::File::open(path).map_err(EventError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_script_reader<R: Read>(reader: R) -> Result<Vec<EventKind>, EventError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut script = Vec::new();

    for result in csv_reader.deserialize::<ScriptRecord>() {
        let row = result.map_err(|e| EventError::Parse(e.to_string()))?;
        let kind = EventKind::parse(&row.event).ok_or_else(|| {
            EventError::Parse(format!(
                "invalid event {:?}: expected \"idle\", \"arrival\", \"fault\", or \"fire\"",
                row.event
            ))
        })?;
        script.push(kind);
    }

    Ok(script)
}
