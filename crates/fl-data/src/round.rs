//! One loaded round: the read-only world plus its initial ledger.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use fl_core::{LocationId, PointDirectory};
use fl_ledger::InventoryLedger;
use fl_plan::{PlanningSession, RoundContext};
use fl_vehicle::Fleet;
use fl_zones::ZoneMap;

use crate::loader::{parse_fleet, parse_map, parse_orders};
use crate::{DataError, DataResult};

/// Delivery points, zones, fleet and the initial allocation of every order.
///
/// Planning sessions and simulator runs each take their own copy of the
/// ledger from [`fresh_ledger`](Self::fresh_ledger); the round itself never
/// changes after loading.
#[derive(Debug)]
pub struct Round {
    points:  PointDirectory,
    zones:   ZoneMap,
    fleet:   Fleet,
    initial: InventoryLedger,
}

impl Round {
    /// Assemble a round from already-parsed parts.
    ///
    /// Every delivery point becomes a ledger location; each order starts
    /// wholly at its origin.
    pub fn new(
        points: PointDirectory,
        zones: ZoneMap,
        fleet: Fleet,
        orders: Vec<fl_ledger::Order>,
    ) -> DataResult<Self> {
        for v in fleet.iter() {
            if !points.contains(&v.home) {
                return Err(DataError::UnknownHome { vehicle: v.name.clone(), home: v.home.clone() });
            }
        }
        let locations: Vec<LocationId> = points.names().cloned().collect();
        let initial = InventoryLedger::new(locations, orders)?;

        tracing::info!(
            points = points.len(),
            zones = zones.len(),
            vehicles = fleet.len(),
            orders = initial.len(),
            "round loaded"
        );
        Ok(Self { points, zones, fleet, initial })
    }

    /// Parse the three documents from any readers.
    pub fn from_readers<M: Read, F: Read, O: Read>(map: M, fleet: F, orders: O) -> DataResult<Self> {
        let (points, zones) = parse_map(map)?;
        let fleet = parse_fleet(fleet, &points)?;
        let orders = parse_orders(orders)?;
        Self::new(points, zones, fleet, orders)
    }

    /// Load the three documents from disk.
    pub fn load(map: &Path, fleet: &Path, orders: &Path) -> DataResult<Self> {
        Self::from_readers(open("map", map)?, open("fleet", fleet)?, open("orders", orders)?)
    }

    pub fn points(&self) -> &PointDirectory {
        &self.points
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Read-only view shared by planner and simulator.
    pub fn context(&self) -> RoundContext<'_> {
        RoundContext::new(&self.points, &self.zones, &self.fleet)
    }

    /// The initial allocation: fraction 1 of every order at its origin.
    pub fn fresh_ledger(&self) -> InventoryLedger {
        self.initial.clone()
    }

    /// A planning session over a fresh ledger.
    pub fn planning_session(&self) -> PlanningSession<'_> {
        PlanningSession::new(self.context(), self.fresh_ledger())
    }

    /// Discard everything `session` planned and start again from the
    /// initial allocation.
    pub fn reset(&self, session: &mut PlanningSession<'_>) {
        session.reset(self.fresh_ledger());
    }
}

fn open(what: &'static str, path: &Path) -> DataResult<File> {
    File::open(path).map_err(|source| DataError::Io { what, source })
}
