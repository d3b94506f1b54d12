//! Unit tests for occupant behavior, kinds, and the priority table.

use vt_core::{Direction, Floor, FloorRange, OccupantId, SimRng};

use crate::{Occupant, OccupantError, OccupantKind, PriorityTable, SpawnProfile};

fn range() -> FloorRange {
    FloorRange::new(Floor(0), Floor(10)).unwrap()
}

/// A kind that never gets sick, for deterministic riding tests.
fn healthy() -> OccupantKind {
    OccupantKind::Civilian { factor0: 0.0, factor1: 0.0 }
}

/// A kind that gets sick on the first check.
fn always_sick() -> OccupantKind {
    OccupantKind::MaintenanceCrew { rate: 1.0 }
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_zero_footprint() {
        let err = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 0, Floor(1), Floor(4), range(),
        )
        .unwrap_err();
        assert!(matches!(err, OccupantError::ZeroFootprint));
    }

    #[test]
    fn rejects_origin_outside_range() {
        let err = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 4, Floor(-1), Floor(4), range(),
        )
        .unwrap_err();
        assert!(matches!(err, OccupantError::OriginOutOfRange { .. }));
    }

    #[test]
    fn rejects_destination_outside_range() {
        let err = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 4, Floor(1), Floor(11), range(),
        )
        .unwrap_err();
        assert!(matches!(err, OccupantError::DestinationOutOfRange { .. }));
    }

    #[test]
    fn destination_direction_derived_from_floors() {
        let up = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 4, Floor(1), Floor(5), range(),
        )
        .unwrap();
        assert_eq!(up.destination_direction(), Direction::Up);

        let down = Occupant::with_destination(
            OccupantId(1), healthy(), 2, 4, Floor(5), Floor(1), range(),
        )
        .unwrap();
        assert_eq!(down.destination_direction(), Direction::Down);
    }

    #[test]
    fn spawn_avoids_origin_destination_collision() {
        let mut rng = SimRng::new(7);
        for i in 0..64 {
            let occ = Occupant::spawn(
                OccupantId(i), healthy(), 2, 4, Floor(3), range(), &mut rng,
            )
            .unwrap();
            assert_ne!(occ.destination(), Floor(3));
        }
    }

    #[test]
    fn spawn_in_two_floor_building_forces_adjacent_destination() {
        let two = FloorRange::new(Floor(0), Floor(1)).unwrap();
        let mut rng = SimRng::new(11);
        // Destination draws come from [0, 1), so origin 0 always collides and
        // the fallback must pick floor 1.
        let occ = Occupant::spawn(
            OccupantId(0), healthy(), 2, 4, Floor(0), two, &mut rng,
        )
        .unwrap();
        assert_eq!(occ.destination(), Floor(1));
    }
}

#[cfg(test)]
mod riding {
    use super::*;

    #[test]
    fn traveled_counters_track_floors() {
        let mut occ = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 4, Floor(2), Floor(5), range(),
        )
        .unwrap();
        occ.traveled_up();
        occ.traveled_up();
        occ.traveled_down();
        assert_eq!(occ.current_floor(), Floor(3));
        assert_eq!(occ.floors_traveled(), 3);
    }

    #[test]
    fn ride_frame_inert_off_board() {
        let mut occ = Occupant::with_destination(
            OccupantId(0), always_sick(), 1, 4, Floor(2), Floor(8), range(),
        )
        .unwrap();
        let mut rng = SimRng::new(1);
        occ.ride_frame(&mut rng);
        assert!(!occ.is_sick());
        assert_eq!(occ.destination(), Floor(8));
    }

    #[test]
    fn sickness_truncates_destination_once() {
        let mut occ = Occupant::with_destination(
            OccupantId(0), always_sick(), 1, 4, Floor(2), Floor(8), range(),
        )
        .unwrap();
        occ.set_on_board(true);
        occ.traveled_up(); // now at floor 3
        let mut rng = SimRng::new(1);

        occ.ride_frame(&mut rng);
        assert!(occ.is_sick());
        assert_eq!(occ.destination(), Floor(4), "truncated to next floor up");

        // Idempotent: further frames and travel never move it again.
        occ.traveled_up();
        occ.ride_frame(&mut rng);
        occ.ride_frame(&mut rng);
        assert_eq!(occ.destination(), Floor(4));
    }

    #[test]
    fn sick_downward_rider_truncates_below() {
        let mut occ = Occupant::with_destination(
            OccupantId(0), always_sick(), 1, 4, Floor(8), Floor(2), range(),
        )
        .unwrap();
        occ.set_on_board(true);
        occ.traveled_down(); // floor 7
        let mut rng = SimRng::new(1);
        occ.ride_frame(&mut rng);
        assert_eq!(occ.destination(), Floor(6));
    }

    #[test]
    fn healthy_rider_keeps_destination() {
        let mut occ = Occupant::with_destination(
            OccupantId(0), healthy(), 2, 4, Floor(0), Floor(9), range(),
        )
        .unwrap();
        occ.set_on_board(true);
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            occ.traveled_up();
            occ.ride_frame(&mut rng);
        }
        assert!(!occ.is_sick());
        assert_eq!(occ.destination(), Floor(9));
    }
}

#[cfg(test)]
mod kinds {
    use super::*;

    #[test]
    fn civilian_chance_scales_with_travel() {
        let kind = OccupantKind::civilian();
        assert_eq!(kind.sick_chance(0), 0.0);
        let five = kind.sick_chance(5);
        assert!((five - 5.0 * 1.1 * 0.01).abs() < 1e-12);
        assert!(kind.sick_chance(10) > five);
    }

    #[test]
    fn responder_chances_ignore_travel() {
        let crew = OccupantKind::maintenance_crew();
        let ff = OccupantKind::firefighter();
        assert_eq!(crew.sick_chance(0), crew.sick_chance(100));
        assert_eq!(ff.sick_chance(0), ff.sick_chance(100));
        assert!(ff.sick_chance(0) < crew.sick_chance(0));
    }

    #[test]
    fn titles() {
        assert_eq!(OccupantKind::civilian().title(), "civilian");
        assert_eq!(OccupantKind::maintenance_crew().title(), "maintenance");
        assert_eq!(OccupantKind::firefighter().title(), "firefighter");
    }
}

#[cfg(test)]
mod priorities {
    use super::*;

    #[test]
    fn default_ranking_orders_responders_first() {
        let table = PriorityTable::default();
        let ff = table.priority_of("firefighter").unwrap();
        let crew = table.priority_of("maintenance").unwrap();
        let civ = table.priority_of("civilian").unwrap();
        assert!(ff < crew && crew < civ);
        assert_eq!(ff, table.highest());
        assert_eq!(civ, table.lowest());
    }

    #[test]
    fn unknown_and_blank_titles_error() {
        let table = PriorityTable::default();
        assert!(table.priority_of("janitor").is_err());
        assert!(table.priority_of("   ").is_err());
    }

    #[test]
    fn alternate_ranking_is_independent() {
        let flipped = PriorityTable::with_ranking(&["civilian", "firefighter"]);
        assert_eq!(flipped.priority_of("civilian").unwrap(), 0);
        assert_eq!(flipped.priority_of("firefighter").unwrap(), 1);
        // The default is untouched — no shared global registry.
        assert_eq!(PriorityTable::default().priority_of("firefighter").unwrap(), 0);
    }
}

#[cfg(test)]
mod profile {
    use super::*;

    #[test]
    fn footprint_draw_respects_bounds() {
        let profile = SpawnProfile::default();
        let mut rng = SimRng::new(3);
        for _ in 0..128 {
            let fp = profile.draw_footprint(&mut rng);
            assert!((2..10).contains(&fp));
        }
    }

    #[test]
    fn degenerate_bounds_fall_back_to_min() {
        let profile = SpawnProfile { min_footprint: 4, max_footprint: 4, ..Default::default() };
        let mut rng = SimRng::new(3);
        assert_eq!(profile.draw_footprint(&mut rng), 4);
    }

    #[test]
    fn kinds_carry_profile_factors() {
        let profile = SpawnProfile { civilian_factors: (0.5, 2.0), ..Default::default() };
        match profile.civilian_kind() {
            OccupantKind::Civilian { factor0, factor1 } => {
                assert_eq!(factor0, 0.5);
                assert_eq!(factor1, 2.0);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
