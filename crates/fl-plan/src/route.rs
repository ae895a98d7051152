//! Committed routes and the per-vehicle route book.

use std::collections::{BTreeMap, VecDeque};

use fl_core::{Timestamp, VehicleId};
use fl_vehicle::Vehicle;

use crate::{RouteImpact, Step};

/// A committed, immutable route.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    vehicle:   VehicleId,
    departure: Timestamp,
    steps:     Vec<Step>,
    impact:    RouteImpact,
}

impl Route {
    pub(crate) fn new(
        vehicle: VehicleId,
        departure: Timestamp,
        steps: Vec<Step>,
        impact: RouteImpact,
    ) -> Self {
        Self { vehicle, departure, steps, impact }
    }

    pub fn vehicle(&self) -> &VehicleId {
        &self.vehicle
    }

    pub fn departure(&self) -> Timestamp {
        self.departure
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn impact(&self) -> &RouteImpact {
        &self.impact
    }

    /// Planned distance is longer than the vehicle can drive.
    pub fn exceeds_range(&self, vehicle: &Vehicle) -> bool {
        self.impact.distance_km > vehicle.range_km
    }
}

/// Committed routes, one queue per vehicle, each sorted by departure.
///
/// Routes with equal departure keep commit order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteBook {
    queues: BTreeMap<VehicleId, Vec<Route>>,
    total:  usize,
}

impl RouteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `route` into its vehicle's queue and return it in place.
    pub fn insert(&mut self, route: Route) -> &Route {
        self.total += 1;
        let queue = self.queues.entry(route.vehicle.clone()).or_default();
        // First position strictly after every route departing at or before
        // this one keeps ties in commit order.
        let at = queue.partition_point(|r| r.departure <= route.departure);
        queue.insert(at, route);
        &queue[at]
    }

    /// Routes of `vehicle`, earliest departure first.
    pub fn routes_for(&self, vehicle: &str) -> &[Route] {
        self.queues.get(vehicle).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every route, grouped by vehicle id then departure.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.queues.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.queues.clear();
        self.total = 0;
    }

    /// Per-vehicle FIFO queues for dispatching.
    pub fn to_queues(&self) -> BTreeMap<VehicleId, VecDeque<Route>> {
        self.queues
            .iter()
            .map(|(v, routes)| (v.clone(), routes.iter().cloned().collect()))
            .collect()
    }
}
