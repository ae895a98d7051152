//! The `Sim` struct and its tick loop.

use std::collections::{BTreeMap, VecDeque};

use fl_core::{LocationId, SimClock, SimConfig, Tick, VehicleId};
use fl_ledger::InventoryLedger;
use fl_plan::{apply_operations, segment_impact, OperationKind, PlanError, RoundContext, Route};
use fl_vehicle::Vehicle;

use crate::{
    DeliveryStatus, SimError, SimEvent, SimEventKind, SimObserver, SimReport, SimResult,
    VehicleRuntimeState, VehicleStatus,
};

/// The simulation runner.
///
/// Holds its own ledger, one runtime state per vehicle (fleet order), the
/// per-vehicle route queues and the event log.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'a> {
    pub config: SimConfig,

    /// Simulation clock: current tick and its wall time.
    pub clock: SimClock,

    pub(crate) ctx:      RoundContext<'a>,
    /// Fleet order; `states[i]` belongs to `vehicles[i]`.
    pub(crate) vehicles: Vec<&'a Vehicle>,
    pub(crate) ledger:   InventoryLedger,
    pub(crate) queues:   BTreeMap<VehicleId, VecDeque<Route>>,
    pub(crate) states:   Vec<VehicleRuntimeState>,
    pub(crate) events:   Vec<SimEvent>,
}

impl<'a> Sim<'a> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` and report.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        let report = self.report();
        tracing::info!(
            final_tick = %report.final_tick,
            events = self.events.len(),
            on_time = report.count(DeliveryStatus::OnTime),
            late = report.count(DeliveryStatus::Late),
            not_delivered = report.count(DeliveryStatus::NotDelivered),
            "simulation finished"
        );
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// horizon).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Report for the state reached so far.
    pub fn report(&self) -> SimReport {
        SimReport::build(
            self.clock.current_tick,
            &self.ledger,
            self.ctx.fleet,
            &self.states,
            &self.events,
        )
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Runtime state of `vehicle`.
    pub fn state(&self, vehicle: &str) -> Option<&VehicleRuntimeState> {
        let i = self.ctx.fleet.position(vehicle)?;
        self.states.get(i)
    }

    /// No vehicle is driving and no route is waiting to depart.
    pub fn is_idle(&self) -> bool {
        self.states.iter().all(|s| !s.is_in_transit()) && self.queues.values().all(VecDeque::is_empty)
    }

    // ── Tick processing ───────────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let logged = self.events.len();
        self.process_tick()?;
        for event in &self.events[logged..] {
            observer.on_event(event);
        }

        let active = self.states.iter().filter(|s| s.is_in_transit()).count();
        observer.on_tick_end(now, active);
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self) -> SimResult<()> {
        for i in 0..self.states.len() {
            match self.states[i].status {
                VehicleStatus::Available => self.try_depart(i)?,
                VehicleStatus::InTransit => self.advance(i)?,
            }
        }
        Ok(())
    }

    /// Pop the head route if it is due and drive to its first stop.
    fn try_depart(&mut self, i: usize) -> SimResult<()> {
        let vehicle = self.vehicles[i];
        let now = self.clock.now();
        let Some(queue) = self.queues.get_mut(&vehicle.name) else {
            return Ok(());
        };
        if !queue.front().is_some_and(|r| r.departure() <= now) {
            return Ok(());
        }
        let Some(route) = queue.pop_front() else {
            return Ok(());
        };
        let Some(first) = route.steps().first() else {
            return Ok(());
        };

        let seg = segment_impact(&self.ctx, vehicle, &vehicle.home, first.location(), self.states[i].load_kg)?;

        let state = &mut self.states[i];
        state.drive(&seg);
        state.status = VehicleStatus::InTransit;
        state.step_index = 0;
        state.waiting = false;
        state.routes_started += 1;
        state.route = Some(route);

        let event = self.stamp(vehicle, SimEventKind::RouteStart, vehicle.home.clone());
        self.log(event);
        Ok(())
    }

    /// Count down towards the current stop and handle the arrival.
    fn advance(&mut self, i: usize) -> SimResult<()> {
        let vehicle = self.vehicles[i];
        let state = &mut self.states[i];
        state.remaining_secs -= f64::from(self.config.tick_duration_secs);
        if state.remaining_secs > 0.0 {
            return Ok(());
        }

        let Some(route) = state.route.take() else {
            state.status = VehicleStatus::Available;
            return Ok(());
        };
        let index = state.step_index;
        let Some(step) = route.steps().get(index) else {
            state.status = VehicleStatus::Available;
            return Ok(());
        };
        let location = step.location().clone();
        let first_attempt = !state.waiting;

        if first_attempt {
            let event = self.stamp(vehicle, SimEventKind::Arrival, location.clone());
            self.log(event);
        }

        // Working copies: committed only when every operation succeeds.
        let mut ledger = self.ledger.clone();
        let mut onboard = self.states[i].onboard.clone();
        match apply_operations(&location, step.operations(), &mut ledger, &mut onboard) {
            Ok(()) => {}
            Err(PlanError::InsufficientStock { order, requested, available, .. }) if step.has_loads() => {
                tracing::warn!(
                    vehicle = %vehicle.name,
                    %location,
                    %order,
                    requested,
                    available,
                    retry_secs = self.config.wait_retry_secs,
                    "stock not there yet; waiting"
                );
                let state = &mut self.states[i];
                state.waiting = true;
                state.remaining_secs = f64::from(self.config.wait_retry_secs);
                state.route = Some(route);
                let event = self
                    .stamp(vehicle, SimEventKind::Waiting, location)
                    .with_order(order, requested);
                self.log(event);
                return Ok(());
            }
            Err(source) => {
                return Err(SimError::Stop { vehicle: vehicle.name.clone(), source });
            }
        }

        self.ledger = ledger;
        let load_kg = self.ledger.weight_of(&onboard);
        {
            let state = &mut self.states[i];
            state.onboard = onboard;
            state.load_kg = load_kg;
            state.waiting = false;
            state.step_index = index + 1;
        }
        for op in step.operations() {
            let kind = match op.kind() {
                OperationKind::Load => SimEventKind::Load,
                OperationKind::Unload => SimEventKind::Unload,
            };
            let event = self
                .stamp(vehicle, kind, location.clone())
                .with_order(op.order().clone(), op.quantity());
            self.log(event);
        }

        match route.steps().get(index + 1) {
            Some(next) => {
                let seg = segment_impact(&self.ctx, vehicle, &location, next.location(), load_kg)?;
                let state = &mut self.states[i];
                state.drive(&seg);
                state.route = Some(route);
            }
            None => {
                let state = &mut self.states[i];
                state.status = VehicleStatus::Available;
                state.step_index = 0;
                state.remaining_secs = 0.0;
                state.routes_completed += 1;
                let event = self.stamp(vehicle, SimEventKind::RouteComplete, location);
                self.log(event);
            }
        }
        Ok(())
    }

    // ── Event log ─────────────────────────────────────────────────────────

    fn stamp(&self, vehicle: &Vehicle, kind: SimEventKind, location: LocationId) -> SimEvent {
        SimEvent::new(self.clock.now(), self.clock.current_tick, vehicle.name.clone(), kind, location)
    }

    fn log(&mut self, event: SimEvent) {
        tracing::debug!(
            tick = %event.tick,
            vehicle = %event.vehicle,
            kind = %event.kind,
            location = %event.location,
            order = event.order.as_ref().map(|o| o.as_str()),
            quantity = event.quantity,
            "event"
        );
        self.events.push(event);
    }

    /// Tick the run is about to process.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}
