use proptest::prelude::*;

use salah_tracker::bearing::{initial_bearing, qibla_bearing, qibla_degrees};
use salah_tracker::carousel::Carousel;
use salah_tracker::schedule::PrayerTable;
use salah_tracker::types::{Coordinate, TimeOfDay};

proptest! {
    /// Bearing is always normalized into [0, 360).
    #[test]
    fn bearing_in_range(
        lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
    ) {
        let b = initial_bearing(
            Coordinate::new(lat1, lon1).unwrap(),
            Coordinate::new(lat2, lon2).unwrap(),
        );
        prop_assert!((0.0..360.0).contains(&b), "bearing={}", b);
    }

    /// Shifting either longitude by a full turn leaves the bearing unchanged.
    #[test]
    fn bearing_longitude_periodic(lat in -89.0f64..=89.0, lon in -180.0f64..=180.0, turns in -2i32..=2) {
        let base = qibla_bearing(Coordinate::new_unchecked(lat, lon));
        let shifted = qibla_bearing(Coordinate::new_unchecked(lat, lon + 360.0 * turns as f64));
        let diff = (base - shifted).abs();
        prop_assert!(diff < 1e-6 || (360.0 - diff) < 1e-6, "base={}, shifted={}", base, shifted);
    }

    /// Rounded readout stays within 0..360.
    #[test]
    fn rounded_qibla_in_range(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        prop_assert!(qibla_degrees(Coordinate::new_unchecked(lat, lon)) < 360);
    }

    /// The selected prayer is either strictly later today or the first one.
    #[test]
    fn next_event_is_upcoming(hour in 0u32..24, minute in 0u32..60) {
        let table = PrayerTable::default();
        let now = TimeOfDay::new(hour, minute).unwrap();
        let next = table.next_event(now);
        let first = &table.events()[0];
        prop_assert!(
            next.time > now || next == first,
            "now={} next={}", now, next.time
        );
        // nothing between now and the selection
        for e in table.events() {
            if e.time > now {
                prop_assert!(e.time >= next.time || next == first);
            }
        }
    }

    /// Index always stays inside [0, len) and a full lap returns home.
    #[test]
    fn carousel_laps(len in 1usize..50, start in 0isize..50, delta in -200isize..200) {
        let c = Carousel::new(len).step(start);
        let moved = c.step(delta);
        prop_assert!(moved.index() < len);
        prop_assert_eq!(c.step(len as isize).index(), c.index());
        prop_assert_eq!(c.step(-(len as isize)).index(), c.index());
    }
}
