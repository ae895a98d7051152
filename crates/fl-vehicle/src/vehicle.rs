//! The vehicle specification and its load-dependent rates.

use fl_core::{LocationId, VehicleId};

/// Static description of one delivery vehicle.
///
/// Rates are per kilometre.  Emission figures are kg CO₂/km, costs are in
/// currency units per km.  Build through [`VehicleBuilder`](crate::VehicleBuilder)
/// to get the positivity checks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub name:              VehicleId,
    pub max_weight_kg:     f64,
    pub max_volume_m3:     f64,
    pub range_km:          f64,
    pub max_speed_kmh:     f64,
    pub emission_full_km:  f64,
    pub emission_empty_km: f64,
    pub cost_full_km:      f64,
    pub cost_empty_km:     f64,
    pub fixed_daily_cost:  f64,
    /// Air-quality sticker class (lower is cleaner).
    pub air_quality_class: u8,
    /// Delivery point every route of this vehicle starts and ends at.
    pub home:              LocationId,
}

impl Vehicle {
    /// Load as a fraction of `max_weight_kg`, clamped to `[0, 1]`.
    ///
    /// A vehicle with a non-positive `max_weight_kg` always reports 0.
    pub fn load_fraction(&self, load_kg: f64) -> f64 {
        if self.max_weight_kg.is_nan() || self.max_weight_kg <= 0.0 || !load_kg.is_finite() {
            return 0.0;
        }
        let raw = load_kg / self.max_weight_kg;
        if !(0.0..=1.0).contains(&raw) {
            tracing::warn!(
                vehicle = %self.name,
                load_kg,
                max_weight_kg = self.max_weight_kg,
                "load outside vehicle capacity; clamping rate interpolation"
            );
        }
        raw.clamp(0.0, 1.0)
    }

    /// Cost per km when carrying `load_kg`.
    pub fn cost_rate(&self, load_kg: f64) -> f64 {
        interpolate(self.cost_empty_km, self.cost_full_km, self.load_fraction(load_kg))
    }

    /// Emission per km when carrying `load_kg`.
    pub fn emission_rate(&self, load_kg: f64) -> f64 {
        interpolate(self.emission_empty_km, self.emission_full_km, self.load_fraction(load_kg))
    }

    pub fn fits_weight(&self, weight_kg: f64) -> bool {
        weight_kg <= self.max_weight_kg + fl_core::FRACTION_EPSILON
    }

    pub fn fits_volume(&self, volume_m3: f64) -> bool {
        volume_m3 <= self.max_volume_m3 + fl_core::FRACTION_EPSILON
    }
}

#[inline]
fn interpolate(empty: f64, full: f64, fraction: f64) -> f64 {
    empty + (full - empty) * fraction
}
