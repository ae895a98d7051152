//! Unit tests for fl-vehicle.

#[cfg(test)]
mod helpers {
    use crate::{Vehicle, VehicleBuilder};

    pub fn van(name: &str) -> Vehicle {
        VehicleBuilder::new(name, "Depot")
            .capacity(1_000.0, 10.0)
            .range_km(200.0)
            .max_speed_kmh(80.0)
            .cost_per_km(0.4, 1.0)
            .emission_per_km(0.2, 0.5)
            .fixed_daily_cost(50.0)
            .air_quality_class(2)
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod cost_model {
    use super::helpers::van;

    #[test]
    fn half_load_cost_is_exact() {
        assert_eq!(van("V").cost_rate(500.0), 0.7);
    }

    #[test]
    fn endpoints_are_the_configured_rates() {
        let v = van("V");
        assert_eq!(v.cost_rate(0.0), 0.4);
        assert_eq!(v.cost_rate(1_000.0), 1.0);
        assert_eq!(v.emission_rate(0.0), 0.2);
        assert!((v.emission_rate(1_000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn overload_is_clamped_to_full_rate() {
        let v = van("V");
        assert_eq!(v.load_fraction(1_500.0), 1.0);
        assert_eq!(v.cost_rate(1_500.0), v.cost_rate(1_000.0));
    }

    #[test]
    fn negative_load_is_clamped_to_empty_rate() {
        let v = van("V");
        assert_eq!(v.load_fraction(-5.0), 0.0);
        assert_eq!(v.emission_rate(-5.0), 0.2);
    }

    #[test]
    fn zero_capacity_reads_as_empty() {
        let mut v = van("V");
        v.max_weight_kg = 0.0;
        assert_eq!(v.load_fraction(100.0), 0.0);
        assert_eq!(v.cost_rate(100.0), 0.4);
    }

    #[test]
    fn rates_are_monotonic_in_load() {
        let v = van("V");
        let mut prev = v.cost_rate(0.0);
        for kg in (100..=1_000).step_by(100) {
            let next = v.cost_rate(kg as f64);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn capacity_checks_tolerate_rounding() {
        let v = van("V");
        assert!(v.fits_weight(1_000.0));
        assert!(v.fits_weight(1_000.0 + 1e-12));
        assert!(!v.fits_weight(1_000.1));
        assert!(v.fits_volume(10.0));
        assert!(!v.fits_volume(10.5));
    }
}

#[cfg(test)]
mod builder {
    use crate::{VehicleBuilder, VehicleError};

    #[test]
    fn zero_capacity_rejected() {
        let err = VehicleBuilder::new("V", "Depot")
            .range_km(10.0)
            .max_speed_kmh(50.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, VehicleError::NonPositive { field: "max_weight_kg", .. }));
    }

    #[test]
    fn negative_rate_rejected() {
        let err = VehicleBuilder::new("V", "Depot")
            .capacity(100.0, 1.0)
            .range_km(10.0)
            .max_speed_kmh(50.0)
            .cost_per_km(-1.0, 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, VehicleError::Negative { field: "cost_empty_km", .. }));
    }

    #[test]
    fn blank_home_rejected() {
        let err = VehicleBuilder::new("V", " ").capacity(1.0, 1.0).build().unwrap_err();
        assert!(matches!(err, VehicleError::NoHome(_)));
    }
}

#[cfg(test)]
mod fleet {
    use fl_core::CoreError;

    use super::helpers::van;
    use crate::{Fleet, VehicleError};

    #[test]
    fn keeps_dataset_order() {
        let fleet = Fleet::new(vec![van("Truck"), van("Bike"), van("Van")]).unwrap();
        let names: Vec<&str> = fleet.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Truck", "Bike", "Van"]);
        assert_eq!(fleet.position("Van"), Some(2));
    }

    #[test]
    fn lookup_by_name() {
        let fleet = Fleet::new(vec![van("A"), van("B")]).unwrap();
        assert_eq!(fleet.get("B").unwrap().name.as_str(), "B");
        assert!(matches!(fleet.vehicle("C"), Err(VehicleError::UnknownVehicle(_))));
    }

    #[test]
    fn duplicates_rejected() {
        let result = Fleet::new(vec![van("A"), van("A")]);
        assert!(matches!(result, Err(VehicleError::Core(CoreError::DuplicateName { .. }))));
    }

    #[test]
    fn invalid_vehicle_rejected() {
        let mut bad = van("A");
        bad.range_km = 0.0;
        assert!(Fleet::new(vec![bad]).is_err());
    }
}
