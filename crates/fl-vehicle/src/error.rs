//! Vehicle-subsystem error type.

use thiserror::Error;

use fl_core::{CoreError, VehicleId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VehicleError {
    #[error("vehicle {vehicle}: {field} must be positive, got {value}")]
    NonPositive {
        vehicle: VehicleId,
        field:   &'static str,
        value:   f64,
    },

    #[error("vehicle {vehicle}: {field} must be non-negative, got {value}")]
    Negative {
        vehicle: VehicleId,
        field:   &'static str,
        value:   f64,
    },

    #[error("vehicle name is empty")]
    EmptyName,

    #[error("vehicle {0} has no home point")]
    NoHome(VehicleId),

    #[error("vehicle {0} not found")]
    UnknownVehicle(VehicleId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
