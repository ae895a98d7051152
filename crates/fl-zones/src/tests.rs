//! Unit tests for fl-zones.
//!
//! Every fixture is a lat/lon rectangle near Paris; test segments run due
//! north so their planar length is exact in metres.

#[cfg(test)]
mod helpers {
    use fl_core::Coordinate;

    use crate::Zone;

    pub const BASE_LAT: f64 = 48.85;
    pub const BASE_LON: f64 = 2.35;

    /// Degrees of latitude spanning `m` metres.
    pub fn dlat(m: f64) -> f64 {
        (m / 6_371_000.0).to_degrees()
    }

    /// A point `north_m` metres north of the base point.
    pub fn north(north_m: f64) -> Coordinate {
        Coordinate::new(BASE_LAT + dlat(north_m), BASE_LON)
    }

    /// Rectangle covering `[south_m, north_m]` along the base meridian and
    /// ±0.01° of longitude around it.
    pub fn band(name: &str, south_m: f64, north_m: f64, priority: i32) -> Zone {
        let (s, n) = (BASE_LAT + dlat(south_m), BASE_LAT + dlat(north_m));
        let (w, e) = (BASE_LON - 0.01, BASE_LON + 0.01);
        Zone::new(
            name,
            vec![
                Coordinate::new(s, w),
                Coordinate::new(s, e),
                Coordinate::new(n, e),
                Coordinate::new(n, w),
            ],
            priority,
        )
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }
}

#[cfg(test)]
mod decompose {
    use fl_core::Coordinate;

    use super::helpers::{approx, band, north};
    use crate::ZoneMap;

    #[test]
    fn higher_priority_takes_whole_segment() {
        let map = ZoneMap::new(vec![
            band("Z2", -500.0, 1_500.0, 1),
            band("Z1", -200.0, 1_200.0, 2),
        ])
        .unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert!(approx(d.get("Z1"), 1_000.0), "Z1 = {}", d.get("Z1"));
        assert!(approx(d.get("Z2"), 0.0), "Z2 = {}", d.get("Z2"));
    }

    #[test]
    fn equal_priority_goes_to_first_listed() {
        let map = ZoneMap::new(vec![
            band("A", -500.0, 1_500.0, 3),
            band("B", -500.0, 1_500.0, 3),
        ])
        .unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert!(approx(d.get("A"), 1_000.0));
        assert_eq!(d.get("B"), 0.0);
    }

    #[test]
    fn partial_crossing() {
        let map = ZoneMap::new(vec![band("Z", 500.0, 2_000.0, 1)]).unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert!(approx(d.get("Z"), 500.0), "got {}", d.get("Z"));
    }

    #[test]
    fn nested_zone_carves_out_its_stretch() {
        // Outer city zone, inner low-emission zone over the middle stretch.
        let map = ZoneMap::new(vec![
            band("City", -100.0, 1_100.0, 1),
            band("LEZ", 300.0, 600.0, 5),
        ])
        .unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert!(approx(d.get("LEZ"), 300.0), "LEZ = {}", d.get("LEZ"));
        assert!(approx(d.get("City"), 700.0), "City = {}", d.get("City"));
        assert!(approx(d.total_m(), 1_000.0));
    }

    #[test]
    fn lower_priority_does_not_reclaim_covered_stretch() {
        // B (priority 1) is fully inside A's footprint; A owns everything.
        let map = ZoneMap::new(vec![
            band("B", 200.0, 400.0, 1),
            band("A", -100.0, 1_100.0, 2),
        ])
        .unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert!(approx(d.get("A"), 1_000.0));
        assert!(approx(d.get("B"), 0.0));
    }

    #[test]
    fn outside_every_zone_is_attributed_to_nobody() {
        let map = ZoneMap::new(vec![band("Z", 5_000.0, 6_000.0, 1)]).unwrap();
        let d = map.decompose(north(0.0), north(1_000.0));
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("Z"), 0.0);
        assert_eq!(d.total_m(), 0.0);
        assert_eq!(d.crossed().count(), 0);
    }

    #[test]
    fn zero_length_segment_is_all_zero() {
        let map = ZoneMap::new(vec![band("Z1", -100.0, 100.0, 2), band("Z2", -100.0, 100.0, 1)])
            .unwrap();
        let d = map.decompose(north(0.0), north(0.0));
        assert_eq!(d.len(), 2);
        assert!(d.iter().all(|(_, m)| m == 0.0));
    }

    #[test]
    fn sum_never_exceeds_segment_length() {
        let map = ZoneMap::new(vec![
            band("A", -50.0, 450.0, 1),
            band("B", 250.0, 800.0, 4),
            band("C", 700.0, 2_000.0, 2),
            band("D", 100.0, 150.0, 9),
        ])
        .unwrap();
        let (a, b) = (north(0.0), north(1_000.0));
        let d = map.decompose(a, b);
        let length = map.decomposer().segment_length_m(a, b);
        assert!(d.total_m() <= length + 1e-6, "{} > {length}", d.total_m());
        assert!(d.iter().all(|(_, m)| m >= 0.0));
    }

    #[test]
    fn entries_follow_priority_order() {
        let map = ZoneMap::new(vec![
            band("Low", 0.0, 10.0, 1),
            band("High", 0.0, 10.0, 7),
            band("Mid", 0.0, 10.0, 3),
        ])
        .unwrap();
        let d = map.decompose(north(0.0), north(1.0));
        let names: Vec<&str> = d.iter().map(|(z, _)| z.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn empty_map_decomposes_to_nothing() {
        let map = ZoneMap::empty();
        let d = map.decompose(Coordinate::new(0.0, 0.0), Coordinate::new(0.1, 0.1));
        assert!(d.is_empty());
        assert_eq!(d.total_m(), 0.0);
    }

    #[test]
    fn closing_vertex_is_accepted() {
        let mut z = band("Z", -100.0, 1_100.0, 1);
        let first = z.ring[0];
        z.ring.push(first);
        let map = ZoneMap::new(vec![z]).unwrap();
        assert!(approx(map.decompose(north(0.0), north(1_000.0)).get("Z"), 1_000.0));
    }

    #[test]
    fn unknown_zone_reads_as_zero() {
        let map = ZoneMap::new(vec![band("Z", -100.0, 100.0, 1)]).unwrap();
        let d = map.decompose(north(0.0), north(50.0));
        assert_eq!(d.get("Elsewhere"), 0.0);
    }
}

#[cfg(test)]
mod zone_map {
    use fl_core::{Coordinate, CoreError};

    use super::helpers::band;
    use crate::{Zone, ZoneError, ZoneMap};

    #[test]
    fn speed_limit_lookup() {
        let map = ZoneMap::new(vec![
            band("LEZ", 0.0, 100.0, 2).with_speed_limit(30.0),
            band("City", 0.0, 100.0, 1),
        ])
        .unwrap();
        assert_eq!(map.speed_limit("LEZ").unwrap(), Some(30.0));
        assert_eq!(map.speed_limit("City").unwrap(), None);
        assert!(matches!(map.speed_limit("Nope"), Err(ZoneError::MissingZoneData(_))));
    }

    #[test]
    fn effective_speed_is_capped_by_zone() {
        let map = ZoneMap::new(vec![band("LEZ", 0.0, 100.0, 2).with_speed_limit(30.0)]).unwrap();
        assert_eq!(map.effective_speed("LEZ", 90.0), 30.0);
        assert_eq!(map.effective_speed("LEZ", 20.0), 20.0);
    }

    #[test]
    fn missing_zone_falls_back_to_vehicle_speed() {
        let map = ZoneMap::empty();
        assert_eq!(map.effective_speed("Ghost", 70.0), 70.0);
    }

    #[test]
    fn duplicate_zone_names_rejected() {
        let result = ZoneMap::new(vec![band("Z", 0.0, 10.0, 1), band("Z", 0.0, 20.0, 2)]);
        assert!(matches!(result, Err(ZoneError::Core(CoreError::DuplicateName { .. }))));
    }

    #[test]
    fn degenerate_rings_rejected() {
        let two = Zone::new("Line", vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)], 1);
        assert!(matches!(ZoneMap::new(vec![two]), Err(ZoneError::DegenerateZone { .. })));

        let repeated = Zone::new(
            "Dup",
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 0.0),
            ],
            1,
        );
        assert!(matches!(ZoneMap::new(vec![repeated]), Err(ZoneError::DegenerateZone { .. })));
    }

    #[test]
    fn non_positive_speed_limit_rejected() {
        let z = band("Z", 0.0, 10.0, 1).with_speed_limit(0.0);
        assert!(matches!(ZoneMap::new(vec![z]), Err(ZoneError::DegenerateZone { .. })));
    }

    #[test]
    fn iteration_keeps_dataset_order() {
        let map = ZoneMap::new(vec![band("B", 0.0, 10.0, 9), band("A", 0.0, 10.0, 1)]).unwrap();
        let names: Vec<&str> = map.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A").unwrap().priority, 1);
    }
}
