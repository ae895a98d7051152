//! Fluent builder for constructing a [`Sim`].

use std::collections::{BTreeMap, VecDeque};

use fl_core::SimConfig;
use fl_ledger::InventoryLedger;
use fl_plan::{RoundContext, RouteBook};

use crate::{Sim, SimError, SimResult, VehicleRuntimeState};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: start, tick duration, horizon, retry interval
/// - [`RoundContext`]: points, zones and fleet of the round
/// - [`InventoryLedger`]: the allocation the replay starts from, normally
///   the round's initial one (not the planning ledger)
///
/// # Optional inputs
///
/// | Method        | Default              |
/// |---------------|----------------------|
/// | `.routes(b)`  | No routes (idle run) |
pub struct SimBuilder<'a> {
    config: SimConfig,
    ctx:    RoundContext<'a>,
    ledger: InventoryLedger,
    routes: RouteBook,
}

impl<'a> SimBuilder<'a> {
    pub fn new(config: SimConfig, ctx: RoundContext<'a>, ledger: InventoryLedger) -> Self {
        Self { config, ctx, ledger, routes: RouteBook::new() }
    }

    /// Committed routes to replay.
    pub fn routes(mut self, routes: RouteBook) -> Self {
        self.routes = routes;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<'a>> {
        if self.config.tick_duration_secs == 0 {
            return Err(SimError::Config("tick_duration_secs must be non-zero".into()));
        }

        let mut queues = BTreeMap::new();
        for route in self.routes.iter() {
            if self.ctx.fleet.get(route.vehicle()).is_none() {
                return Err(SimError::UnknownVehicle(route.vehicle().clone()));
            }
            queues
                .entry(route.vehicle().clone())
                .or_insert_with(VecDeque::new)
                .push_back(route.clone());
        }

        let template = self.ledger.zeroed_content_template();
        let states = self
            .ctx
            .fleet
            .iter()
            .map(|_| VehicleRuntimeState::idle(template.clone()))
            .collect();

        tracing::debug!(
            routes = self.routes.len(),
            vehicles = self.ctx.fleet.len(),
            end_tick = %self.config.end_tick(),
            "simulation built"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            vehicles: self.ctx.fleet.iter().collect(),
            ctx: self.ctx,
            ledger: self.ledger,
            queues,
            states,
            events: Vec::new(),
        })
    }
}
