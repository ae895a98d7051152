//! Plain data row types written by output backends.
//!
//! Identifiers and timestamps are already rendered as text so backends only
//! have to lay out columns.

use fl_sim::{DeliveryRecord, SimEvent, VehicleSummary};

/// One simulator event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// `YYYY-MM-DDTHH:MM:SS`.
    pub time:     String,
    pub tick:     u64,
    pub vehicle:  String,
    pub kind:     &'static str,
    pub location: String,
    /// Empty when the event concerns no order.
    pub order:    String,
    pub quantity: Option<f64>,
}

impl From<&SimEvent> for EventRow {
    fn from(e: &SimEvent) -> Self {
        Self {
            time:     e.time.to_string(),
            tick:     e.tick.0,
            vehicle:  e.vehicle.to_string(),
            kind:     e.kind.as_str(),
            location: e.location.to_string(),
            order:    e.order.as_ref().map(ToString::to_string).unwrap_or_default(),
            quantity: e.quantity,
        }
    }
}

/// Delivery classification of one order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub order:       String,
    pub destination: String,
    pub deadline:    String,
    pub delivered:   f64,
    /// Empty when nothing reached the destination.
    pub last_unload: String,
    pub status:      &'static str,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(d: &DeliveryRecord) -> Self {
        Self {
            order:       d.order.to_string(),
            destination: d.destination.to_string(),
            deadline:    d.deadline.to_string(),
            delivered:   d.delivered,
            last_unload: d.last_unload.map(|t| t.to_string()).unwrap_or_default(),
            status:      d.status.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSummaryRow {
    pub vehicle:          String,
    pub travel_cost:      f64,
    pub fixed_cost:       f64,
    pub total_cost:       f64,
    pub emission:         f64,
    pub distance_km:      f64,
    pub routes_completed: u32,
}

impl From<&VehicleSummary> for VehicleSummaryRow {
    fn from(v: &VehicleSummary) -> Self {
        Self {
            vehicle:          v.vehicle.to_string(),
            travel_cost:      v.travel_cost,
            fixed_cost:       v.fixed_cost,
            total_cost:       v.total_cost(),
            emission:         v.emission,
            distance_km:      v.distance_km,
            routes_completed: v.routes_completed,
        }
    }
}
