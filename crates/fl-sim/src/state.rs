//! Per-vehicle runtime state.

use fl_ledger::Fractions;
use fl_plan::{Route, SegmentImpact};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VehicleStatus {
    /// At home, free to start the next route.
    Available,
    /// Driving towards, or waiting at, the stop `step_index`.
    InTransit,
}

/// Everything the simulator tracks about one vehicle.
///
/// Owned by the [`Sim`](crate::Sim); rebuilt from scratch for every run.
#[derive(Clone, Debug)]
pub struct VehicleRuntimeState {
    pub status:         VehicleStatus,
    pub route:          Option<Route>,
    /// Index of the stop being approached (or waited at).
    pub step_index:     usize,
    /// Seconds left before reaching the stop (or re-checking stock).
    pub remaining_secs: f64,
    /// Arrival at the current stop has been logged; now retrying for stock.
    /// Retries do not log another Arrival.
    pub waiting:        bool,
    pub onboard:        Fractions,
    pub load_kg:        f64,

    // ── Running totals ────────────────────────────────────────────────────
    pub cost:             f64,
    pub emission:         f64,
    pub distance_km:      f64,
    pub routes_started:   u32,
    pub routes_completed: u32,
}

impl VehicleRuntimeState {
    /// An idle, empty vehicle.  `onboard` is the ledger's zeroed template.
    pub fn idle(onboard: Fractions) -> Self {
        Self {
            status:           VehicleStatus::Available,
            route:            None,
            step_index:       0,
            remaining_secs:   0.0,
            waiting:          false,
            onboard,
            load_kg:          0.0,
            cost:             0.0,
            emission:         0.0,
            distance_km:      0.0,
            routes_started:   0,
            routes_completed: 0,
        }
    }

    pub fn is_in_transit(&self) -> bool {
        self.status == VehicleStatus::InTransit
    }

    /// Start driving `seg`: add its totals and set the time to arrival.
    pub(crate) fn drive(&mut self, seg: &SegmentImpact) {
        self.cost += seg.cost;
        self.emission += seg.emission;
        self.distance_km += seg.distance_km;
        self.remaining_secs = seg.duration_secs();
    }
}
