//! Unit tests for vt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, OccupantId};

    #[test]
    fn index_cast() {
        assert_eq!(CarId(42).index(), 42);
        assert_eq!(usize::from(OccupantId(7)), 7);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CarId::INVALID.0, u32::MAX);
        assert_eq!(OccupantId::INVALID.0, u32::MAX);
        assert_eq!(OccupantId::default(), OccupantId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(3).to_string(), "CarId(3)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Floor, FloorRange, VtError};

    #[test]
    fn above_below() {
        assert_eq!(Floor(4).above(), Floor(5));
        assert_eq!(Floor(0).below(), Floor(-1));
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(matches!(
            FloorRange::new(Floor(5), Floor(5)),
            Err(VtError::InvalidFloorRange { .. })
        ));
        assert!(FloorRange::new(Floor(3), Floor(2)).is_err());
    }

    #[test]
    fn range_contains_both_endpoints() {
        let r = FloorRange::new(Floor(-2), Floor(10)).unwrap();
        assert!(r.contains(Floor(-2)));
        assert!(r.contains(Floor(10)));
        assert!(!r.contains(Floor(11)));
        assert_eq!(r.span(), 13);
    }

    #[test]
    fn slot_is_offset_from_lowest() {
        let r = FloorRange::new(Floor(-1), Floor(3)).unwrap();
        assert_eq!(r.slot(Floor(-1)), 0);
        assert_eq!(r.slot(Floor(3)), 4);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Floor};

    #[test]
    fn toward_resolves_down_and_up() {
        assert_eq!(Direction::toward(Floor(5), Floor(2)), Direction::Down);
        assert_eq!(Direction::toward(Floor(2), Floor(5)), Direction::Up);
    }

    #[test]
    fn toward_same_floor_is_up() {
        assert_eq!(Direction::toward(Floor(3), Floor(3)), Direction::Up);
    }
}

#[cfg(test)]
mod frame {
    use crate::Frame;

    #[test]
    fn arithmetic() {
        assert_eq!(Frame(10) + 5, Frame(15));
        assert_eq!(Frame(10).next(), Frame(11));
        assert_eq!(Frame(15).since(Frame(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Frame(12).to_string(), "F12");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn chance_clamps_probability() {
        let mut rng = SimRng::new(1);
        assert!(rng.chance(2.0));
        assert!(!rng.chance(-1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
