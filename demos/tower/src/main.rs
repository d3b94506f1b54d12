//! tower — a twelve-floor office tower running on the rust_vt framework.
//!
//! Three cars serve the building: two full-span, one restricted to the lower
//! floors.  The run opens with a scripted event sequence (so the first
//! minutes are the same every time), then hands over to the weighted live
//! odds.  Every notification goes to the console and to
//! `output/tower/transcript.csv`.

use std::io::Cursor;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use vt_building::{BuildingBuilder, BuildingConfig, CarConfig, ConsoleSink};
use vt_core::{CarId, Floor};
use vt_event::{load_script_reader, EventPolicy};
use vt_output::{CsvTranscript, TeeSink};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const LIVE_FRAMES: u64 = 400;
const FRAME_MILLIS: u64 = 25; // wall-clock pacing; 0 for as-fast-as-possible

// ── Warm-up script ────────────────────────────────────────────────────────────

// One row per frame.  A burst of arrivals, one fault, one fire, then calm.
const WARMUP_CSV: &str = "\
event\n\
arrival\n\
idle\n\
arrival\n\
arrival\n\
idle\n\
idle\n\
fault\n\
idle\n\
idle\n\
arrival\n\
idle\n\
fire\n\
idle\n\
idle\n\
arrival\n\
idle\n\
";

// ── Configuration ─────────────────────────────────────────────────────────────

fn tower_config() -> BuildingConfig {
    let lowest = Floor(0);
    let highest = Floor(11);

    let mut shuttle = CarConfig::standard(CarId(2), lowest, Floor(5));
    shuttle.capacity = 8;

    BuildingConfig {
        lowest_floor: lowest,
        highest_floor: highest,
        max_occupants_per_floor: 4,
        cars: vec![
            CarConfig::standard(CarId(0), lowest, highest),
            CarConfig::standard(CarId(1), lowest, highest),
            shuttle,
        ],
        spawn: Default::default(),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== tower — rust_vt vertical transport ===");
    println!("Floors: 0..=11  |  Cars: 3  |  Seed: {SEED}");
    println!();

    // 1. Load the warm-up script.
    let script = load_script_reader(Cursor::new(WARMUP_CSV))?;
    let warmup_frames = script.len() as u64;
    println!("Warm-up script: {warmup_frames} frames");

    // 2. Build the building, scripted first.
    let mut building = BuildingBuilder::new(tower_config())
        .policy(EventPolicy::scripted(script))
        .seed(SEED)
        .build()?;

    // 3. Console + CSV transcript.
    std::fs::create_dir_all("output/tower")?;
    let transcript = CsvTranscript::create(Path::new("output/tower/transcript.csv"))?;
    let mut sink = TeeSink::new(ConsoleSink, transcript);

    // 4. Scripted warm-up.
    let t0 = Instant::now();
    for _ in 0..warmup_frames {
        building.operate(&mut sink);
    }

    // 5. Hand over to the live odds and pace against the wall clock.
    building.set_policy(EventPolicy::default_weighted());
    for _ in 0..LIVE_FRAMES {
        building.operate(&mut sink);
        if FRAME_MILLIS > 0 {
            thread::sleep(Duration::from_millis(FRAME_MILLIS));
        }
    }
    let elapsed = t0.elapsed();

    sink.second.finish()?;

    // 6. Summary.
    println!();
    println!(
        "Ran {} frames in {:.3} s",
        warmup_frames + LIVE_FRAMES,
        elapsed.as_secs_f64()
    );
    println!(
        "Outstanding requests: {} pending, {} claimed  |  Waiting on floors: {}",
        building.ledger().pending().len(),
        building.ledger().claimed().len(),
        building.total_waiting()
    );
    println!();

    println!("{:<8} {:<10} {:<10} {:<8}", "Car", "Floor", "Direction", "Riders");
    println!("{}", "-".repeat(38));
    for car in building.cars() {
        println!(
            "{:<8} {:<10} {:<10} {:<8}",
            car.id().0,
            car.current_floor().0,
            car.direction().to_string(),
            car.occupant_count(),
        );
    }

    println!();
    println!("Transcript written to output/tower/transcript.csv");
    Ok(())
}
