//! Delivery classification and per-vehicle summaries.

use std::collections::BTreeMap;
use std::fmt;

use fl_core::{LocationId, OrderId, Tick, Timestamp, VehicleId};
use fl_ledger::InventoryLedger;
use fl_vehicle::Fleet;

use crate::{SimEvent, SimEventKind, VehicleRuntimeState};

/// Delivered fraction from which an order counts as delivered.
pub const DELIVERED_THRESHOLD: f64 = 0.99;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    OnTime,
    Late,
    NotDelivered,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::OnTime => "on_time",
            DeliveryStatus::Late => "late",
            DeliveryStatus::NotDelivered => "not_delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub order:       OrderId,
    pub destination: LocationId,
    pub deadline:    Timestamp,
    /// Sum of the order's Unload quantities at its destination.
    pub delivered:   f64,
    /// Time of the latest such Unload.
    pub last_unload: Option<Timestamp>,
    pub status:      DeliveryStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSummary {
    pub vehicle:          VehicleId,
    pub travel_cost:      f64,
    /// Daily fixed cost, charged once if the vehicle started any route.
    pub fixed_cost:       f64,
    pub emission:         f64,
    pub distance_km:      f64,
    pub routes_completed: u32,
}

impl VehicleSummary {
    pub fn total_cost(&self) -> f64 {
        self.travel_cost + self.fixed_cost
    }
}

/// Outcome of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    /// Tick at which the run stopped.
    pub final_tick: Tick,
    /// One record per order, dataset order.
    pub deliveries: Vec<DeliveryRecord>,
    /// One summary per vehicle, fleet order.
    pub vehicles:   Vec<VehicleSummary>,
}

impl SimReport {
    pub(crate) fn build(
        final_tick: Tick,
        ledger: &InventoryLedger,
        fleet: &Fleet,
        states: &[VehicleRuntimeState],
        events: &[SimEvent],
    ) -> Self {
        let vehicles = fleet
            .iter()
            .zip(states)
            .map(|(v, s)| VehicleSummary {
                vehicle:          v.name.clone(),
                travel_cost:      s.cost,
                fixed_cost:       if s.routes_started > 0 { v.fixed_daily_cost } else { 0.0 },
                emission:         s.emission,
                distance_km:      s.distance_km,
                routes_completed: s.routes_completed,
            })
            .collect();
        Self {
            final_tick,
            deliveries: classify_deliveries(ledger, events),
            vehicles,
        }
    }

    pub fn count(&self, status: DeliveryStatus) -> usize {
        self.deliveries.iter().filter(|d| d.status == status).count()
    }

    pub fn delivery(&self, order: &str) -> Option<&DeliveryRecord> {
        self.deliveries.iter().find(|d| d.order.as_str() == order)
    }

    /// Travel plus fixed cost over the whole fleet.
    pub fn total_cost(&self) -> f64 {
        self.vehicles.iter().map(VehicleSummary::total_cost).sum()
    }

    pub fn total_emission(&self) -> f64 {
        self.vehicles.iter().map(|v| v.emission).sum()
    }
}

/// Classify every order of `ledger` from the Unload events in `events`.
///
/// Only unloads of the order at its own destination count.  An order is
/// delivered once the summed fraction reaches [`DELIVERED_THRESHOLD`]; it is
/// on time if the last counted unload is no later than the deadline.
pub fn classify_deliveries(ledger: &InventoryLedger, events: &[SimEvent]) -> Vec<DeliveryRecord> {
    let mut unloaded: BTreeMap<&OrderId, (f64, Option<Timestamp>)> = BTreeMap::new();
    for e in events.iter().filter(|e| e.kind == SimEventKind::Unload) {
        let (Some(order_id), Some(qty)) = (&e.order, e.quantity) else {
            continue;
        };
        let Ok(order) = ledger.order(order_id) else {
            continue;
        };
        if e.location != order.destination {
            continue;
        }
        let entry = unloaded.entry(order_id).or_insert((0.0, None));
        entry.0 += qty;
        entry.1 = entry.1.max(Some(e.time));
    }

    ledger
        .orders()
        .map(|o| {
            let (delivered, last_unload) = unloaded.get(&o.id).copied().unwrap_or((0.0, None));
            let status = match last_unload {
                Some(t) if delivered >= DELIVERED_THRESHOLD => {
                    if t <= o.deadline { DeliveryStatus::OnTime } else { DeliveryStatus::Late }
                }
                _ => DeliveryStatus::NotDelivered,
            };
            DeliveryRecord {
                order: o.id.clone(),
                destination: o.destination.clone(),
                deadline: o.deadline,
                delivered,
                last_unload,
                status,
            }
        })
        .collect()
}
