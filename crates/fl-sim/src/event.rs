//! The simulation event log entries.

use std::fmt;

use fl_core::{LocationId, OrderId, Tick, Timestamp, VehicleId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimEventKind {
    RouteStart,
    Arrival,
    Waiting,
    Load,
    Unload,
    RouteComplete,
}

impl SimEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SimEventKind::RouteStart => "route_start",
            SimEventKind::Arrival => "arrival",
            SimEventKind::Waiting => "waiting",
            SimEventKind::Load => "load",
            SimEventKind::Unload => "unload",
            SimEventKind::RouteComplete => "route_complete",
        }
    }
}

impl fmt::Display for SimEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the append-only event log.
///
/// `order` and `quantity` are set for Load/Unload events only.  The log is
/// ordered by time, ties in emission order.
#[derive(Clone, Debug, PartialEq)]
pub struct SimEvent {
    pub time:     Timestamp,
    pub tick:     Tick,
    pub vehicle:  VehicleId,
    pub kind:     SimEventKind,
    pub location: LocationId,
    pub order:    Option<OrderId>,
    pub quantity: Option<f64>,
}

impl SimEvent {
    pub fn new(
        time: Timestamp,
        tick: Tick,
        vehicle: VehicleId,
        kind: SimEventKind,
        location: LocationId,
    ) -> Self {
        Self { time, tick, vehicle, kind, location, order: None, quantity: None }
    }

    /// Attach the order and fraction an event refers to.
    pub fn with_order(mut self, order: OrderId, quantity: f64) -> Self {
        self.order = Some(order);
        self.quantity = Some(quantity);
        self
    }
}
