//! Fluent, validating construction of [`Vehicle`]s.
//!
//! ```rust
//! use fl_vehicle::VehicleBuilder;
//!
//! let van = VehicleBuilder::new("Van1", "Depot")
//!     .capacity(1_000.0, 12.0)
//!     .range_km(250.0)
//!     .max_speed_kmh(90.0)
//!     .cost_per_km(0.4, 1.0)
//!     .emission_per_km(0.15, 0.30)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(van.cost_rate(500.0), 0.7);
//! ```

use fl_core::{LocationId, VehicleId};

use crate::{Vehicle, VehicleError, VehicleResult};

/// Builder for [`Vehicle`].
///
/// Every numeric field starts at 0; [`build`](Self::build) rejects the ones
/// that must be positive (capacity, range, speed) and the ones that must not
/// be negative (rates, fixed cost).
pub struct VehicleBuilder {
    vehicle: Vehicle,
}

impl VehicleBuilder {
    pub fn new(name: impl Into<VehicleId>, home: impl Into<LocationId>) -> Self {
        Self {
            vehicle: Vehicle {
                name:              name.into(),
                max_weight_kg:     0.0,
                max_volume_m3:     0.0,
                range_km:          0.0,
                max_speed_kmh:     0.0,
                emission_full_km:  0.0,
                emission_empty_km: 0.0,
                cost_full_km:      0.0,
                cost_empty_km:     0.0,
                fixed_daily_cost:  0.0,
                air_quality_class: 0,
                home:              home.into(),
            },
        }
    }

    pub fn capacity(mut self, max_weight_kg: f64, max_volume_m3: f64) -> Self {
        self.vehicle.max_weight_kg = max_weight_kg;
        self.vehicle.max_volume_m3 = max_volume_m3;
        self
    }

    pub fn range_km(mut self, km: f64) -> Self {
        self.vehicle.range_km = km;
        self
    }

    pub fn max_speed_kmh(mut self, kmh: f64) -> Self {
        self.vehicle.max_speed_kmh = kmh;
        self
    }

    /// Cost per km when empty and at full load.
    pub fn cost_per_km(mut self, empty: f64, full: f64) -> Self {
        self.vehicle.cost_empty_km = empty;
        self.vehicle.cost_full_km = full;
        self
    }

    /// Emission per km when empty and at full load.
    pub fn emission_per_km(mut self, empty: f64, full: f64) -> Self {
        self.vehicle.emission_empty_km = empty;
        self.vehicle.emission_full_km = full;
        self
    }

    pub fn fixed_daily_cost(mut self, cost: f64) -> Self {
        self.vehicle.fixed_daily_cost = cost;
        self
    }

    pub fn air_quality_class(mut self, class: u8) -> Self {
        self.vehicle.air_quality_class = class;
        self
    }

    pub fn build(self) -> VehicleResult<Vehicle> {
        let v = self.vehicle;
        check(&v)?;
        Ok(v)
    }
}

/// Validate an already-assembled vehicle (used by dataset loaders that
/// deserialize `Vehicle` directly).
pub fn check(v: &Vehicle) -> VehicleResult<()> {
    if v.name.is_blank() {
        return Err(VehicleError::EmptyName);
    }
    if v.home.is_blank() {
        return Err(VehicleError::NoHome(v.name.clone()));
    }
    for (field, value) in [
        ("max_weight_kg", v.max_weight_kg),
        ("max_volume_m3", v.max_volume_m3),
        ("range_km", v.range_km),
        ("max_speed_kmh", v.max_speed_kmh),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(VehicleError::NonPositive { vehicle: v.name.clone(), field, value });
        }
    }
    for (field, value) in [
        ("emission_full_km", v.emission_full_km),
        ("emission_empty_km", v.emission_empty_km),
        ("cost_full_km", v.cost_full_km),
        ("cost_empty_km", v.cost_empty_km),
        ("fixed_daily_cost", v.fixed_daily_cost),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(VehicleError::Negative { vehicle: v.name.clone(), field, value });
        }
    }
    Ok(())
}
