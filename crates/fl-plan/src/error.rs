//! Planning error type.
//!
//! Every variant is recoverable: the call that produced it changed nothing.

use std::fmt;

use thiserror::Error;

use fl_core::{CoreError, LocationId, OrderId, VehicleId};
use fl_ledger::LedgerError;
use fl_vehicle::VehicleError;

/// Which vehicle capacity a step exceeded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapacityKind {
    Weight,
    Volume,
}

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CapacityKind::Weight => "weight",
            CapacityKind::Volume => "volume",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("operation quantity must be a positive fraction, got {quantity}")]
    InvalidQuantity { quantity: f64 },

    #[error("operation has no order reference")]
    EmptyOrderRef,

    #[error("step has no location")]
    EmptyLocation,

    #[error("step at {0} has no operations")]
    EmptyStep(LocationId),

    #[error("no operation #{index} (step has {len})")]
    NoSuchOperation { index: usize, len: usize },

    #[error("{location} holds {available} of {order}, cannot load {requested}")]
    InsufficientStock {
        location:  LocationId,
        order:     OrderId,
        requested: f64,
        available: f64,
    },

    #[error("vehicle carries {onboard} of {order}, cannot unload {requested} at {location}")]
    InsufficientOnboard {
        location:  LocationId,
        order:     OrderId,
        requested: f64,
        onboard:   f64,
    },

    #[error("{kind} capacity exceeded: {required} > {limit}")]
    OverCapacity {
        kind:     CapacityKind,
        required: f64,
        limit:    f64,
    },

    #[error("no route in progress; call begin_route first")]
    NoRouteInProgress,

    #[error("route for {vehicle} already has {steps} validated step(s)")]
    RouteInProgress { vehicle: VehicleId, steps: usize },

    #[error("route has no validated steps")]
    NoSteps,

    #[error("vehicle still carries {fraction} of {order}")]
    VehicleNotEmptyAtEnd { order: OrderId, fraction: f64 },

    #[error("route of {vehicle} must start and end at {home}")]
    RouteMustReturnHome { vehicle: VehicleId, home: LocationId },

    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
