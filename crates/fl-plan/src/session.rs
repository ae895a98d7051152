//! `PlanningSession`: the live planning state of one round.
//!
//! The session owns the planning ledger, the onboard content of the vehicle
//! being routed, the steps validated so far and the book of committed
//! routes.  All round data comes in through an explicit [`RoundContext`].

use fl_core::{FRACTION_EPSILON, Timestamp, VehicleId};
use fl_ledger::{Fractions, InventoryLedger};

use crate::{PlanError, PlanResult, RoundContext, Route, RouteBook, RouteImpact, Step, StepDraft};

/// Route under construction.
#[derive(Clone, Debug)]
struct OpenRoute {
    vehicle: VehicleId,
    steps:   Vec<Step>,
    /// Ledger and onboard content when the route was opened.
    checkpoint: (InventoryLedger, Fractions),
}

pub struct PlanningSession<'a> {
    ctx:     RoundContext<'a>,
    ledger:  InventoryLedger,
    onboard: Fractions,
    open:    Option<OpenRoute>,
    routes:  RouteBook,
}

impl<'a> PlanningSession<'a> {
    /// Start planning against `ledger` (normally the round's initial
    /// allocation).
    pub fn new(ctx: RoundContext<'a>, ledger: InventoryLedger) -> Self {
        let onboard = ledger.zeroed_content_template();
        Self { ctx, ledger, onboard, open: None, routes: RouteBook::new() }
    }

    pub fn context(&self) -> RoundContext<'a> {
        self.ctx
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Content of the vehicle currently being routed.
    pub fn onboard(&self) -> &Fractions {
        &self.onboard
    }

    pub fn routes(&self) -> &RouteBook {
        &self.routes
    }

    pub fn current_vehicle(&self) -> Option<&VehicleId> {
        self.open.as_ref().map(|r| &r.vehicle)
    }

    /// Steps validated for the open route.
    pub fn current_steps(&self) -> &[Step] {
        self.open.as_ref().map(|r| r.steps.as_slice()).unwrap_or(&[])
    }

    /// Open a route for `vehicle`.
    ///
    /// Switching vehicle is allowed while the open route has no steps;
    /// otherwise commit or [`abandon_route`](Self::abandon_route) first.
    pub fn begin_route(&mut self, vehicle: &str) -> PlanResult<()> {
        let vehicle = self.ctx.vehicle(vehicle)?;
        if let Some(open) = &self.open {
            if !open.steps.is_empty() {
                return Err(PlanError::RouteInProgress {
                    vehicle: open.vehicle.clone(),
                    steps:   open.steps.len(),
                });
            }
        }
        self.open = Some(OpenRoute {
            vehicle:    vehicle.name.clone(),
            steps:      Vec::new(),
            checkpoint: (self.ledger.clone(), self.onboard.clone()),
        });
        tracing::debug!(vehicle = %vehicle.name, "route opened");
        Ok(())
    }

    /// Validate `draft` for the open route and, on success, append it.
    pub fn validate_step(&mut self, draft: &StepDraft) -> PlanResult<&Step> {
        let open = self.open.as_mut().ok_or(PlanError::NoRouteInProgress)?;
        let vehicle = self.ctx.vehicle(&open.vehicle)?;

        match draft.validate(vehicle, &self.ledger, &self.onboard) {
            Ok(v) => {
                tracing::debug!(
                    vehicle = %open.vehicle,
                    location = %v.step.location(),
                    ops = v.step.operations().len(),
                    weight_kg = v.step.snapshot().weight_kg,
                    "step accepted"
                );
                self.ledger = v.ledger;
                self.onboard = v.onboard;
                open.steps.push(v.step);
                Ok(&open.steps[open.steps.len() - 1])
            }
            Err(e) => {
                tracing::warn!(
                    vehicle = %open.vehicle,
                    location = %draft.location(),
                    error = %e,
                    "step rejected"
                );
                Err(e)
            }
        }
    }

    /// Drop the open route and restore the ledger and onboard content it
    /// started from.
    pub fn abandon_route(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::debug!(vehicle = %open.vehicle, steps = open.steps.len(), "route abandoned");
            (self.ledger, self.onboard) = open.checkpoint;
        }
    }

    /// Turn the open route into a committed [`Route`] departing at
    /// `departure`.
    ///
    /// Requires at least one step, an empty vehicle and both ends at the
    /// vehicle's home point.  On error the open route stays as it was.
    pub fn commit_route(&mut self, departure: Timestamp) -> PlanResult<&Route> {
        let open = self.open.as_ref().ok_or(PlanError::NoRouteInProgress)?;
        let vehicle = self.ctx.vehicle(&open.vehicle)?;

        let (Some(first), Some(last)) = (open.steps.first(), open.steps.last()) else {
            return Err(PlanError::NoSteps);
        };
        if let Some((order, &fraction)) =
            self.onboard.iter().find(|&(_, &f)| f.abs() > FRACTION_EPSILON)
        {
            return Err(PlanError::VehicleNotEmptyAtEnd { order: order.clone(), fraction });
        }
        if *first.location() != vehicle.home || *last.location() != vehicle.home {
            return Err(PlanError::RouteMustReturnHome {
                vehicle: vehicle.name.clone(),
                home:    vehicle.home.clone(),
            });
        }

        let impact = RouteImpact::compute(&self.ctx, vehicle, &open.steps)?;

        let Some(open) = self.open.take() else {
            return Err(PlanError::NoRouteInProgress);
        };
        let route = Route::new(open.vehicle, departure, open.steps, impact);
        // Sub-epsilon residue is dropped once the route is accepted.
        self.onboard = self.ledger.zeroed_content_template();

        tracing::info!(
            vehicle = %route.vehicle(),
            departure = %route.departure(),
            steps = route.steps().len(),
            km = route.impact().distance_km,
            cost = route.impact().cost,
            emission = route.impact().emission,
            "route committed"
        );
        if route.exceeds_range(vehicle) {
            tracing::warn!(
                vehicle = %vehicle.name,
                km = route.impact().distance_km,
                range_km = vehicle.range_km,
                "route longer than vehicle range"
            );
        }

        Ok(self.routes.insert(route))
    }

    /// Discard every step, route and ledger change; start over from
    /// `initial`.
    pub fn reset(&mut self, initial: InventoryLedger) {
        tracing::info!(routes = self.routes.len(), "planning session reset");
        self.onboard = initial.zeroed_content_template();
        self.ledger = initial;
        self.open = None;
        self.routes.clear();
    }

    /// Consume the session, keeping the committed routes.
    pub fn into_routes(self) -> RouteBook {
        self.routes
    }
}
